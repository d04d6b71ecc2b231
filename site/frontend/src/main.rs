fn main() {
    showcase::platform::browser::start();
}
