//! qrcheckin main entrypoint.

use qrcheckin::run;
use qrcheckin::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
