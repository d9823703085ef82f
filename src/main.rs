fn main() {
    if let Err(err) = seco::cli::run() {
        seco::ui::eprintln_error(&err);
        std::process::exit(seco::exit::exit_code(&err));
    }
}
