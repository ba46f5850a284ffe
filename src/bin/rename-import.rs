use bexly_tools::run::run_rewrite;

fn main() {
    if let Err(e) = run_rewrite() {
        eprint!("{}", e.tree());
        std::process::exit(1);
    }
}
