//! cw - greedy first-fit graph coloring from the command line

use colorwork::ui::output;

fn main() {
    if let Err(e) = colorwork::cli::run() {
        output::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
