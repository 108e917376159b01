/// Command names offered when completing the first word of a line
pub const KNOWN_COMMANDS: &[&str] = &[
    "cd", "exit", "pwd", "ls", "cat", "echo", "grep", "mkdir", "rm", "cp", "mv",
];

/// Known commands starting with `prefix`, in table order.
pub fn matching(prefix: &str) -> Vec<&'static str> {
    KNOWN_COMMANDS
        .iter()
        .copied()
        .filter(|name| name.starts_with(prefix))
        .collect()
}
