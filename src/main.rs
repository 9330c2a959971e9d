fn main() {
    disaster_haven::run();
}
