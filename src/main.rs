fn main() {
    gesture_fighter::game::run();
}
