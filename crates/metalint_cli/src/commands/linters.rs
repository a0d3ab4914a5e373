//! Linters command implementation

use miette::Result;

use crate::linters::builtin;

pub fn run_linters() -> Result<()> {
    println!("Built-in linters:");
    for task in builtin() {
        println!("  {:<22} speed {}", task.name(), task.speed);
    }
    Ok(())
}
