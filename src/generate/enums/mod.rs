pub mod generate_action;
