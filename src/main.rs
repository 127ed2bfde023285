fn main() {
    if let Err(e) = telecare_lib::run() {
        eprintln!("telecare: {e}");
        std::process::exit(1);
    }
}
