fn main() {
    signup_banner_frontend::start();
}
