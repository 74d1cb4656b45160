fn main() {
    pip_dsc::run_cli();
}
