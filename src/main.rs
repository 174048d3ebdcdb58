fn main() {
    arrayops::cli::run();
}
