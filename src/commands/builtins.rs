//! Verb handlers
//!
//! Informational verbs only write to the transcript. `cd`, `unlock` and
//! `exit` additionally request an effect from the host.

use chrono::Local;

use super::{Invocation, TerminalEffect, COMMANDS};
use crate::models::{GatedRealm, Section};

pub(super) fn list(inv: &mut Invocation<'_>) {
    let listing = Section::ALL
        .into_iter()
        .filter(|section| *section != Section::Home)
        .map(|section| {
            let locked = section
                .gate()
                .is_some_and(|realm| !inv.env.gate.is_unlocked(realm));
            let icon = if locked { "🔒" } else { "📁" };
            format!("{} {}/", icon, section.name())
        })
        .collect::<Vec<_>>()
        .join("  ");
    inv.output(listing);
}

pub(super) fn print_path(inv: &mut Invocation<'_>) {
    let path = inv.env.path();
    inv.output(path);
}

pub(super) fn change_section(inv: &mut Invocation<'_>) {
    let target = match inv.args.first().copied() {
        None | Some("..") | Some("~") | Some("/") => Section::Home,
        Some(name) => match name.parse::<Section>() {
            Ok(section) => section,
            Err(_) => {
                inv.error(format!("cd: no such directory: {}", name));
                return;
            }
        },
    };

    inv.output(format!("{} Navigating to {}...", target.icon(), target.title()));
    inv.emit(TerminalEffect::Navigate(target));
}

pub(super) fn whoami(inv: &mut Invocation<'_>) {
    let profile = &inv.config.profile;
    let lines = [
        format!("👤 {} ({})", profile.name, profile.handle),
        format!("💻 {}", profile.role),
        format!("🎓 {}", profile.education),
        format!("📍 {}", profile.location),
        format!("📧 {}", profile.email),
    ];
    inv.output_lines(lines);
}

pub(super) fn unlock(inv: &mut Invocation<'_>) {
    let [realm, code] = inv.args else {
        inv.error("Usage: unlock <realm> <code>");
        return;
    };
    let (realm, code) = (realm.to_string(), code.to_string());

    // Same message whatever the outcome; the gate answers out of band
    inv.output(format!("🔓 Attempting to unlock {} realm...", realm));
    inv.emit(TerminalEffect::UnlockAttempt { code, realm });
}

pub(super) fn projects(inv: &mut Invocation<'_>) {
    let lines: Vec<String> = std::iter::once("🚀 Featured Projects:".to_string())
        .chain(
            inv.config
                .profile
                .projects
                .iter()
                .map(|p| format!("• {} [{}]", p.name, p.status)),
        )
        .collect();
    inv.output_lines(lines);
}

pub(super) fn skills(inv: &mut Invocation<'_>) {
    let lines: Vec<String> = std::iter::once("💻 Technical Skills:".to_string())
        .chain(
            inv.config
                .profile
                .skills
                .iter()
                .map(|group| format!("{}: {}", group.category, group.items.join(", "))),
        )
        .collect();
    inv.output_lines(lines);
}

pub(super) fn contact(inv: &mut Invocation<'_>) {
    let lines: Vec<String> = std::iter::once("📬 Get in touch:".to_string())
        .chain(
            inv.config
                .profile
                .contacts
                .iter()
                .map(|link| format!("{}: {}", link.label, link.value)),
        )
        .collect();
    inv.output_lines(lines);
}

pub(super) fn history(inv: &mut Invocation<'_>) {
    if inv.history.is_empty() {
        inv.output("No commands in history");
        return;
    }
    let limit = inv.config.terminal.history_display_limit;
    let lines: Vec<String> = inv
        .history
        .tail(limit)
        .map(|(index, line)| format!("{:>5}  {}", index, line))
        .collect();
    inv.output_lines(lines);
}

pub(super) fn date(inv: &mut Invocation<'_>) {
    let now = Local::now();
    inv.output(now.format("%a %b %e %H:%M:%S %Y").to_string());
}

pub(super) fn echo(inv: &mut Invocation<'_>) {
    let text = inv.args.join(" ");
    inv.output(text);
}

pub(super) fn banner(inv: &mut Invocation<'_>) {
    let spaced: String = inv
        .config
        .profile
        .handle
        .to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let title = format!("{}  ::  R E A L M S", spaced);
    let width = title.chars().count() + 6;
    let rule = "═".repeat(width);
    inv.output_lines([
        format!("╔{}╗", rule),
        format!("║   {}   ║", title),
        format!("╚{}╝", rule),
        "Five realms. Two locked. One terminal.".to_string(),
    ]);
}

pub(super) fn neofetch(inv: &mut Invocation<'_>) {
    let config = inv.config;
    let gate = inv.env.gate;
    let header = format!("{}@{}", config.terminal.user, config.terminal.host);
    let unlocked: Vec<&str> = GatedRealm::ALL
        .into_iter()
        .filter(|realm| gate.is_unlocked(*realm))
        .map(GatedRealm::name)
        .collect();
    let unlocked = if unlocked.is_empty() {
        "none".to_string()
    } else {
        unlocked.join(", ")
    };

    let lines = [
        "-".repeat(header.chars().count()),
        "OS: RealmOS (web)".to_string(),
        format!("Shell: {} {}", config.terminal.title, config.terminal.version),
        format!("Realm: {}", inv.env.section.title()),
        format!("Unlocked: {}", unlocked),
        format!("Name: {}", config.profile.name),
        format!("Role: {}", config.profile.role),
        format!("Location: {}", config.profile.location),
        format!("Projects: {}", config.profile.projects.len()),
        format!("Commands run: {}", inv.history.len()),
    ];
    inv.output_lines(std::iter::once(header).chain(lines));
}

pub(super) fn ping(inv: &mut Invocation<'_>) {
    let host = inv.args.first().copied().unwrap_or("localhost");
    let mut lines = vec![format!("PING {} (127.0.0.1): 56 data bytes", host)];
    lines.extend(
        (0..3).map(|seq| format!("64 bytes from 127.0.0.1: icmp_seq={} ttl=64 time=0.04{} ms", seq, seq)),
    );
    lines.push(format!("--- {} ping statistics ---", host));
    lines.push("3 packets transmitted, 3 packets received, 0.0% packet loss".to_string());
    inv.output_lines(lines);
}

pub(super) fn sudo(inv: &mut Invocation<'_>) {
    let user = inv.config.terminal.user.clone();
    inv.error(format!(
        "[sudo] {} is not in the sudoers file. This incident will be reported.",
        user
    ));
}

pub(super) fn clear(inv: &mut Invocation<'_>) {
    inv.clear_transcript();
}

pub(super) fn help(inv: &mut Invocation<'_>) {
    let width = COMMANDS
        .iter()
        .map(|spec| spec.synopsis().chars().count())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = std::iter::once("📋 Available Commands:".to_string())
        .chain(
            COMMANDS
                .iter()
                .map(|spec| format!("{:<width$} - {}", spec.synopsis(), spec.description)),
        )
        .collect();
    inv.output_lines(lines);
}

pub(super) fn exit(inv: &mut Invocation<'_>) {
    inv.system("logout");
    inv.emit(TerminalEffect::CloseTerminal);
}
