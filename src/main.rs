fn main() {
    if let Err(e) = monopoly_wallet::app::run(std::env::args()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
