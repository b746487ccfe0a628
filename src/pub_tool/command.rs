//! pub commands offered on `pubspec.yaml`

/// A pub invocation with its fixed argument and success marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PubCommand {
    Get,
    Upgrade,
}

impl PubCommand {
    pub const ALL: [PubCommand; 2] = [PubCommand::Get, PubCommand::Upgrade];

    /// The single argument passed to the pub executable
    pub fn argument(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Upgrade => "upgrade",
        }
    }

    /// Text pub prints to stdout when the command succeeded
    pub fn success_marker(&self) -> &'static str {
        match self {
            Self::Get => "Got dependencies!",
            Self::Upgrade => "Dependencies upgraded!",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Get => "Pub: Get Dependencies",
            Self::Upgrade => "Pub: Upgrade Dependencies",
        }
    }

    /// Command identifier used with `workspace/executeCommand`
    pub fn command_id(&self) -> &'static str {
        match self {
            Self::Get => "pub.get",
            Self::Upgrade => "pub.upgrade",
        }
    }

    pub fn from_command_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.command_id() == id)
    }
}
