use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crate::core::command::ShellCommand;
use crate::shell::bus::CommandSender;

/// Reads wire tokens from stdin, one per line, and forwards them onto the
/// command bus. Unknown tokens are silently ignored, exactly as they would
/// be coming from the engine. Stdin closing quits the shell.
pub fn spawn_wire_reader(sender: CommandSender) -> JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };

            if let Some(command) = ShellCommand::parse_wire(&line) {
                let quitting = command == ShellCommand::Quit;
                sender.send_command(command);
                if quitting {
                    return;
                }
            }
        }

        sender.send_command(ShellCommand::Quit);
    })
}
