//! Console driver
//!
//! Line-oriented command loop over any async reader/writer pair. Lines are
//! either forge commands (`repair`, `enchant`, `suicide` and their aliases) or console
//! builtins (`inspect`, `select <slot>`, `help`, `quit`).

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::{CommandContext, CommandSender};
use crate::error::AppResult;
use crate::handlers::{EnchantHandler, ForgeCommand, RepairHandler, SuicideHandler};
use crate::host::{EnchantmentRegistry, MemoryPlayer};

const HELP: &str = "Commands: repair [hand|all], enchant <name> [level], enchant list, \
                    suicide, inspect, select <slot>, help, quit";

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleReply {
    /// Print and keep reading
    Print(String),
    /// Nothing to print
    Silent,
    /// Stop the loop
    Quit,
}

/// Dispatches console lines to the handlers
pub struct Console<R> {
    repair: RepairHandler,
    enchant: EnchantHandler<R>,
    suicide: SuicideHandler,
}

impl<R: EnchantmentRegistry> Console<R> {
    pub fn new(repair: RepairHandler, enchant: EnchantHandler<R>, suicide: SuicideHandler) -> Self {
        Self {
            repair,
            enchant,
            suicide,
        }
    }

    /// Handle one line on behalf of `player`
    pub fn handle_line(&self, player: &mut MemoryPlayer, line: &str) -> ConsoleReply {
        let line = line.trim();
        let mut words = line.split_whitespace();

        match words.next().map(str::to_ascii_lowercase).as_deref() {
            None => ConsoleReply::Silent,
            Some("quit") | Some("exit") => ConsoleReply::Quit,
            Some("help") => ConsoleReply::Print(HELP.to_string()),
            Some("inspect") => ConsoleReply::Print(inspect(player)),
            Some("select") => {
                let selected = words
                    .next()
                    .and_then(|s| s.parse::<usize>().ok())
                    .filter(|slot| player.select_slot(*slot));
                match selected {
                    Some(slot) => ConsoleReply::Print(format!("Selected slot {}.", slot)),
                    None => ConsoleReply::Print("Usage: select <slot>".to_string()),
                }
            }
            Some(_) => ConsoleReply::Print(self.dispatch(player, line)),
        }
    }

    fn dispatch(&self, player: &mut MemoryPlayer, line: &str) -> String {
        let mut context = CommandContext::new().with_sender(player.id()).from_console();
        context.ensure_correlation_id();

        let reply = ForgeCommand::parse_line(line).and_then(|command| match command {
            ForgeCommand::Repair(cmd) => self
                .repair
                .execute(player, cmd, &context)
                .map(|outcome| outcome.message),
            ForgeCommand::Enchant(cmd) => self
                .enchant
                .execute(player, cmd, &context)
                .map(|outcome| outcome.message),
            ForgeCommand::Suicide(cmd) => self
                .suicide
                .execute(player, cmd, &context)
                .map(|outcome| outcome.message),
        });

        reply.unwrap_or_else(|e| {
            if e.is_client_error() {
                tracing::debug!(
                    correlation_id = ?context.correlation_id,
                    error = %e,
                    "Command rejected"
                );
            }
            e.to_reply().message
        })
    }

    /// Run until EOF or `quit`.
    ///
    /// # Errors
    /// - `AppError::Io` if reading or writing fails
    pub async fn run<In, Out>(
        &self,
        player: &mut MemoryPlayer,
        input: In,
        output: &mut Out,
    ) -> AppResult<()>
    where
        In: AsyncBufRead + Unpin,
        Out: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            match self.handle_line(player, &line) {
                ConsoleReply::Print(text) => {
                    output.write_all(text.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                    output.flush().await?;
                }
                ConsoleReply::Silent => {}
                ConsoleReply::Quit => break,
            }
        }

        Ok(())
    }
}

/// Main hand as JSON, followed by the occupied slot count
fn inspect(player: &MemoryPlayer) -> String {
    let hand = match player.main_hand() {
        Some(item) => serde_json::to_string(item).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize item");
            "unavailable".to_string()
        }),
        None => "empty".to_string(),
    };
    format!(
        "Slot {}: {} ({} occupied slots, health {})",
        player.selected_slot(),
        hand,
        player.items().count(),
        player.health()
    )
}

/// Player used by the console binary
pub fn demo_player(name: &str) -> MemoryPlayer {
    use crate::host::MemoryItem;

    let player = MemoryPlayer::new(name)
        .with_permission("*")
        .with_item(0, MemoryItem::tool("diamond_sword", 250))
        .with_item(1, MemoryItem::tool("iron_pickaxe", 100))
        .with_item(2, MemoryItem::tool("bow", 30))
        .with_item(3, MemoryItem::block("cobblestone"))
        .with_item(4, MemoryItem::book("book"));

    tracing::debug!(player = %player.name(), id = %player.id(), "Demo player ready");
    player
}
