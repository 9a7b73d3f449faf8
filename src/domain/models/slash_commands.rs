#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let prefix = text.split_whitespace().next().unwrap_or_default();
        let cmd = SlashCommand {
            command: prefix.to_string(),
        };
        if cmd.is_quit()
            || cmd.is_exit_interview()
            || cmd.is_new_interview()
            || cmd.is_usage()
            || cmd.is_history()
            || cmd.is_help()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit"].contains(&self.command.as_str());
    }

    pub fn is_exit_interview(&self) -> bool {
        return ["/x", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_new_interview(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_usage(&self) -> bool {
        return ["/u", "/usage"].contains(&self.command.as_str());
    }

    pub fn is_history(&self) -> bool {
        return ["/hi", "/history"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
