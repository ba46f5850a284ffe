use bexly_tools::run::run_icon;

fn main() {
    if let Err(e) = run_icon() {
        eprint!("{}", e.tree());
        std::process::exit(1);
    }
}
