//! Console output shared by the subcommands.
//!
//! Status lines go to stdout after any printed payload; errors go to stderr
//! with a highlighted label when the terminal supports colour.
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

lazy_static! {
    static ref CONSOLE: Mutex<()> = Mutex::new(());
}

/// Print `teams-ctrf: <message>` to stdout
pub fn status(message: &str) {
    let _held = CONSOLE.lock();
    println!("teams-ctrf: {}", message);
}

/// Print `error: <message>` to stderr, colouring the label if possible
pub fn print_error(message: &str) {
    let _held = CONSOLE.lock();
    let coloured = term::stderr().is_some_and(|mut t| {
        let ok = t.fg(term::color::BRIGHT_RED).is_ok() && write!(t, "error").is_ok();
        let _ = t.reset();
        ok
    });
    if !coloured {
        eprint!("error");
    }
    eprintln!(": {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_output_does_not_poison_lock() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                thread::spawn(move || {
                    status(&format!("status {}", i));
                    print_error(&format!("error {}", i));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(!CONSOLE.is_poisoned());
    }
}
