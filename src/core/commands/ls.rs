use super::{Command, CommandContext, CommandError};
use std::cmp::Ordering;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Clone, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    /// Directories first, then everything else, each group ordered by name.
    pub fn read_entries(&self, dir: &Path) -> Result<Vec<Entry>, CommandError> {
        let failed = |e| CommandError::ExecutionError("Failed to list directory".to_string(), e);

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(failed)? {
            let entry = entry.map_err(failed)?;
            let kind = match entry.file_type() {
                Ok(t) if t.is_dir() => EntryKind::Directory,
                _ => EntryKind::File,
            };
            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        entries.sort_by(|a, b| match a.kind.cmp(&b.kind) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        });
        Ok(entries)
    }
}

fn render_table(entries: &[Entry], out: &mut dyn Write) -> std::io::Result<()> {
    let headers = ["(index)", "Name", "Type"];
    let rows: Vec<[String; 3]> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| [i.to_string(), e.name.clone(), e.kind.label().to_string()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!(" {:<width$} ", cell, width = w))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    writeln!(out, "{}", border("┌", "┬", "┐"))?;
    writeln!(out, "{}", line(&headers.map(String::from)))?;
    writeln!(out, "{}", border("├", "┼", "┤"))?;
    for row in &rows {
        writeln!(out, "{}", line(row))?;
    }
    writeln!(out, "{}", border("└", "┴", "┘"))
}

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "The 'ls' command does not accept arguments".to_string(),
            ));
        }

        let entries = self.read_entries(ctx.current_dir())?;
        if entries.is_empty() {
            writeln!(ctx.out, "(empty directory)")?;
        } else {
            render_table(&entries, ctx.out)?;
        }
        writeln!(ctx.out)?;
        Ok(())
    }
}
