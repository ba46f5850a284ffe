use bexly_tools::run::run;

fn main() {
    if let Err(e) = run() {
        eprint!("{}", e.tree());
        std::process::exit(1);
    }
}
