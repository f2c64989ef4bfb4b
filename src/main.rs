fn main() {
    imgio::app::startup::startup();
}
