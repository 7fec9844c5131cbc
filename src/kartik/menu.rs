//! # Menu Loop
//!
//! Two screens, one loop:
//!
//! ```text
//!            ┌──────────── link opened / failed ───────────┐
//!            ▼                                             │
//!   ┌──────────────┐  View my Projects  ┌──────────────┐   │
//!   │  Main Menu   │ ─────────────────▶ │   Projects   │ ──┘
//!   └──────────────┘ ◀───── Back ────── └──────────────┘
//!            │
//!          Exit
//!            ▼
//!          done
//! ```
//!
//! [`Menu`] owns its three collaborators ([`Prompter`], [`LinkOpener`],
//! [`Terminal`]) and never touches stdin, stdout or the OS directly, so the whole
//! state machine runs under test with the scripted doubles in `test_utils`.
//!
//! A failed link open anywhere below the main menu, the projects screen included,
//! is reported and the loop carries on. Any other error ends the session.

use crate::card::{draw_frame, CARD_WIDTH};
use crate::error::{CardError, Result};
use crate::layout::word_wrap;
use crate::opener::LinkOpener;
use crate::profile::{Links, Profile};
use crate::prompt::Prompter;
use crate::styles::THEME;
use crate::terminal::{Message, Terminal};
use console::Style;
use std::time::Duration;

pub const PROMPT: &str = "What would you like to do?";

/// Wrap width for project descriptions on the projects screen.
pub const DESCRIPTION_WIDTH: usize = 50;

const LINK_PAUSE: Duration = Duration::from_secs(1);
const ERROR_PAUSE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Projects,
    Portfolio,
    Email,
    GitHub,
    Resume,
    Exit,
}

impl MainAction {
    pub const ALL: [MainAction; 6] = [
        MainAction::Projects,
        MainAction::Portfolio,
        MainAction::Email,
        MainAction::GitHub,
        MainAction::Resume,
        MainAction::Exit,
    ];

    pub fn label(self) -> String {
        let (icon, text, style) = match self {
            MainAction::Projects => ("📂", "View my Projects", Style::new().blue()),
            MainAction::Portfolio => ("🌐", "Visit my Portfolio", Style::new().cyan()),
            MainAction::Email => ("✉️", "Send me an Email", Style::new().green()),
            MainAction::GitHub => ("🐙", "Check out my GitHub", Style::new().magenta()),
            MainAction::Resume => ("📄", "View my Resume", Style::new().yellow()),
            MainAction::Exit => ("🚪", "Exit", Style::new().red()),
        };
        format!("{}  {}", icon, style.apply_to(text))
    }

    /// The URL this action opens, if it opens one.
    pub fn link(self, links: &Links) -> Option<&str> {
        match self {
            MainAction::Portfolio => Some(links.portfolio.as_str()),
            MainAction::Email => Some(links.email.as_str()),
            MainAction::GitHub => Some(links.github.as_str()),
            MainAction::Resume => Some(links.resume.as_str()),
            MainAction::Projects | MainAction::Exit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    /// Index into the profile's project list.
    Visit(usize),
    More,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChoice<A> {
    pub label: String,
    pub action: A,
}

impl<A> MenuChoice<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

pub fn main_menu() -> Vec<MenuChoice<MainAction>> {
    MainAction::ALL
        .iter()
        .map(|&action| MenuChoice::new(action.label(), action))
        .collect()
}

pub fn project_menu(profile: &Profile) -> Vec<MenuChoice<ProjectAction>> {
    let mut choices: Vec<_> = profile
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            MenuChoice::new(
                format!("{}. Visit {}", i + 1, project.name),
                ProjectAction::Visit(i),
            )
        })
        .collect();
    choices.push(MenuChoice::new("🔍 View more projects", ProjectAction::More));
    choices.push(MenuChoice::new("↩️  Back to main menu", ProjectAction::Back));
    choices
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, P, O, T> {
    profile: &'a Profile,
    prompter: P,
    opener: O,
    terminal: T,
}

impl<'a, P: Prompter, O: LinkOpener, T: Terminal> Menu<'a, P, O, T> {
    pub fn new(profile: &'a Profile, prompter: P, opener: O, terminal: T) -> Self {
        Self {
            profile,
            prompter,
            opener,
            terminal,
        }
    }

    /// Runs until the user picks Exit.
    pub fn run(&mut self) -> Result<()> {
        self.terminal.clear_screen()?;

        loop {
            self.render_home()?;
            let action = self.choose(&main_menu())?;
            log::debug!("main menu: {:?}", action);

            match self.dispatch(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.terminal.print_message(&Message::info(
                        "👋 Thank you for visiting! Have a great day!",
                    ))?;
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    log::warn!("{}", e);
                    self.terminal.print_message(&Message::error(
                        "❌ Error: Could not open the requested link",
                    ))?;
                    self.terminal.write_error(&e.to_string())?;
                    self.terminal.pause(ERROR_PAUSE);
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_parts(self) -> (P, O, T) {
        (self.prompter, self.opener, self.terminal)
    }

    fn render_home(&mut self) -> Result<()> {
        self.terminal.write_line("\n")?;
        for line in draw_frame(self.profile, CARD_WIDTH) {
            self.terminal.write_line(&line)?;
        }
        self.terminal.write_line("\n")?;

        let tip = format!(
            "{}{}{}{}",
            THEME.muted.apply_to("Tip:"),
            THEME.plain.apply_to(" Use "),
            THEME.highlight.apply_to("cmd/ctrl + click"),
            THEME.plain.apply_to(" to open links directly\n"),
        );
        self.terminal.write_line(&tip)
    }

    fn dispatch(&mut self, action: MainAction) -> Result<Flow> {
        let profile = self.profile;

        match action {
            MainAction::Exit => Ok(Flow::Exit),
            MainAction::Projects => {
                self.show_projects()?;
                Ok(Flow::Continue)
            }
            _ => {
                if let Some(url) = action.link(&profile.links) {
                    self.opener.open(url)?;
                    self.terminal
                        .print_message(&Message::success("✨ Opening requested link..."))?;
                    self.terminal.pause(LINK_PAUSE);
                    self.terminal.clear_screen()?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn show_projects(&mut self) -> Result<()> {
        let profile = self.profile;

        self.terminal.clear_screen()?;
        self.terminal.write_line("\n")?;
        self.terminal.write_line(&format!(
            "{}\n",
            THEME.heading.apply_to("🚀 My Top Projects")
        ))?;

        for (i, project) in profile.projects.iter().enumerate() {
            let title = format!("{}. {}", i + 1, project.name);
            self.terminal
                .write_line(&THEME.project_title.apply_to(title).to_string())?;
            for line in word_wrap(&project.description, DESCRIPTION_WIDTH) {
                let line = format!("   {}", line);
                self.terminal
                    .write_line(&THEME.plain.apply_to(line).to_string())?;
            }
            let link = format!("   🔗 {}", project.link);
            self.terminal
                .write_line(&THEME.project_link.apply_to(link).to_string())?;
            self.terminal.write_line("")?;
        }

        self.terminal.write_line(
            &THEME
                .muted
                .apply_to("\nTip: Use cmd/ctrl + click to open the links directly")
                .to_string(),
        )?;

        let action = self.choose(&project_menu(profile))?;
        log::debug!("projects menu: {:?}", action);

        match action {
            ProjectAction::Back => self.terminal.clear_screen(),
            ProjectAction::More => {
                self.opener.open(&profile.links.repositories)?;
                self.terminal
                    .print_message(&Message::success("✨ Opening GitHub repositories..."))
            }
            ProjectAction::Visit(index) => {
                let project = profile
                    .projects
                    .get(index)
                    .ok_or(CardError::Selection(index))?;
                self.opener.open(&project.link)?;
                self.terminal.print_message(&Message::success(format!(
                    "✨ Opening {}...",
                    project.name
                )))
            }
        }
    }

    fn choose<A: Copy>(&mut self, choices: &[MenuChoice<A>]) -> Result<A> {
        let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
        let index = self.prompter.select(PROMPT, &labels)?;
        choices
            .get(index)
            .map(|c| c.action)
            .ok_or(CardError::Selection(index))
    }
}
