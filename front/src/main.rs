fn main() {
    front::start();
}
