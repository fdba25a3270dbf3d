mod data;
mod input;
mod report;
mod server;
mod solver;

use log::error;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("serve") => server::run_server().await,
        Some(availability_path) if args.len() == 3 => {
            if let Err(e) = run(availability_path, &args[2]) {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("usage: timetable_solver <availability.csv> <roster.csv>");
            eprintln!("       timetable_solver serve");
            std::process::exit(2);
        }
    }
}

fn run(availability_path: &str, roster_path: &str) -> Result<(), String> {
    let availability = input::read_table(availability_path)?;
    let roster = input::read_table(roster_path)?;
    let domain = data::Domain::from_tables(&availability, &roster)?;
    report::print_domain(&domain);
    let output = solver::solve(&domain);
    report::print_results(&domain, &output);
    Ok(())
}
