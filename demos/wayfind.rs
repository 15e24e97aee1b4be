//! Terminal pathfinding visualiser.
//!
//! Run: cargo run --bin wayfind
//! Headless: cargo run --bin wayfind -- --map maze.txt --strategy astar

use std::error::Error;
use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use clap::Parser;
use wayfind_core::{Grid, GridError};
use wayfind_crossterm::CrosstermDriver;
use wayfind_demos::session::running_line;
use wayfind_demos::{Args, Command, Session};
use wayfind_search::{Step, Strategy};

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let grid = match &args.map {
        Some(path) => Grid::parse(&std::fs::read_to_string(path)?)?,
        None => Grid::new(args.size)?,
    };
    let session = Session::with_grid(grid);

    if let Some(strategy) = args.strategy {
        return headless(session, strategy);
    }

    let mut driver = CrosstermDriver::new().with_mouse(!args.no_mouse);
    driver.init()?;
    let result = event_loop(&mut driver, session, args);
    driver.close();
    result
}

/// Run once without touching the terminal mode and print the result.
fn headless(mut session: Session, strategy: Strategy) -> Result<(), Box<dyn Error>> {
    session.run(strategy, |_, _| ControlFlow::Continue(()))?;
    println!("{}", session.summary());
    Ok(())
}

fn event_loop(
    driver: &mut CrosstermDriver,
    mut session: Session,
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    let layout = driver.layout();
    let mut msgs = Vec::new();
    loop {
        driver.draw(session.grid(), &session.status_line())?;
        driver.poll_msgs(Duration::from_millis(50), &mut msgs)?;
        for msg in msgs.drain(..) {
            match session.update(msg, &layout) {
                Ok(Command::None) => {}
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Run(strategy)) => {
                    let mut failure = None;
                    let label = running_line(strategy);
                    let result = session.run(strategy, |grid, step| {
                        animate(driver, grid, step, &label, args.delay(), &mut failure)
                    });
                    if let Some(e) = failure {
                        return Err(e);
                    }
                    report_search(&mut session, result.map(|_| ()));
                }
                Ok(Command::RunAll) => {
                    let mut failure = None;
                    let mut current: Option<Strategy> = None;
                    let mut label = String::new();
                    let result = session.run_all(|strategy, grid, step| {
                        if current != Some(strategy) {
                            if current.is_some() && !args.pause().is_zero() {
                                thread::sleep(args.pause());
                            }
                            current = Some(strategy);
                            label = running_line(strategy);
                        }
                        animate(driver, grid, step, &label, args.delay(), &mut failure)
                    });
                    if let Some(e) = failure {
                        return Err(e);
                    }
                    report_search(&mut session, result.map(|_| ()));
                }
                // Clicks outside the board.
                Err(GridError::OutOfBounds { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Draw one step, wait, and check whether the user wants to stop.
fn animate(
    driver: &mut CrosstermDriver,
    grid: &Grid,
    step: Step,
    label: &str,
    delay: Duration,
    failure: &mut Option<Box<dyn Error>>,
) -> ControlFlow<()> {
    if let Err(e) = driver.draw(grid, label) {
        *failure = Some(e);
        return ControlFlow::Break(());
    }
    if step == Step::Done {
        return ControlFlow::Continue(());
    }
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    match driver.cancel_requested() {
        Ok(false) => ControlFlow::Continue(()),
        Ok(true) => ControlFlow::Break(()),
        Err(e) => {
            *failure = Some(e);
            ControlFlow::Break(())
        }
    }
}

/// A search that could not start (e.g. no end placed yet) is not fatal.
fn report_search(session: &mut Session, result: Result<(), wayfind_search::SearchError>) {
    if let Err(e) = result {
        log::debug!("search not started: {e}");
        session.notify(e.to_string());
    }
}
