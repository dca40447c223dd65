fn main() {
    // Validate the embedded terminal catalog at compile time.
    validate_toml(
        "src/catalog/default_terminals.toml",
        include_str!("src/catalog/default_terminals.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
