//! Productivity sections opened from the office computers

use std::fmt;
use std::str::FromStr;

/// One of the four productivity panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Habits,
    Tasks,
    Progress,
    Routine,
}

/// Dialog content for a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

impl SectionInfo {
    /// Shown for ids outside the catalogue
    pub const FALLBACK: SectionInfo = SectionInfo {
        title: "Section",
        description: "Access this section.",
        features: &[],
    };

    /// Info for any section id, falling back for unknown ones
    pub fn lookup(id: &str) -> &'static SectionInfo {
        match id.parse::<Section>() {
            Ok(section) => section.info(),
            Err(_) => &Self::FALLBACK,
        }
    }
}

const HABITS: SectionInfo = SectionInfo {
    title: "🎯 Habits Tracker",
    description: "Track and build your daily habits. Create new habits, monitor your progress, and maintain consistency in your routine.",
    features: &["Create new habits", "Track daily progress", "View habit streaks", "Set reminders"],
};

const TASKS: SectionInfo = SectionInfo {
    title: "📋 Task Manager",
    description: "Manage your to-do list with time tracking. Add tasks, set time estimates, and visualize your progress with charts.",
    features: &["Add new tasks", "Set time estimates", "Track completion", "View analytics"],
};

const PROGRESS: SectionInfo = SectionInfo {
    title: "📊 Progress Dashboard",
    description: "View your overall progress and achievements. See detailed analytics and track your journey towards your goals.",
    features: &["View statistics", "Track achievements", "See trends", "Export reports"],
};

const ROUTINE: SectionInfo = SectionInfo {
    title: "⏰ Routine Planner",
    description: "Plan and organize your daily routine. Set up schedules, timers, and manage your time effectively.",
    features: &["Create schedules", "Set timers", "Manage time blocks", "Track efficiency"],
};

impl Section {
    pub const ALL: [Section; 4] = [Section::Habits, Section::Tasks, Section::Progress, Section::Routine];

    /// Lower-case identifier passed to section openers
    pub fn id(self) -> &'static str {
        match self {
            Self::Habits => "habits",
            Self::Tasks => "tasks",
            Self::Progress => "progress",
            Self::Routine => "routine",
        }
    }

    /// Capitalised tag carried by the scene node
    pub fn label(self) -> &'static str {
        match self {
            Self::Habits => "Habits",
            Self::Tasks => "Tasks",
            Self::Progress => "Progress",
            Self::Routine => "Routine",
        }
    }

    pub fn info(self) -> &'static SectionInfo {
        match self {
            Self::Habits => &HABITS,
            Self::Tasks => &TASKS,
            Self::Progress => &PROGRESS,
            Self::Routine => &ROUTINE,
        }
    }

    /// Screen colour of the section's computer (0xRRGGBB)
    pub fn screen_color(self) -> u32 {
        match self {
            Self::Habits => 0xff6b6b,
            Self::Tasks => 0x4ecdc4,
            Self::Progress => 0x45b7d1,
            Self::Routine => 0x96ceb4,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "habits" => Ok(Self::Habits),
            "tasks" => Ok(Self::Tasks),
            "progress" => Ok(Self::Progress),
            "routine" => Ok(Self::Routine),
            _ => Err(format!("Unknown section: {}", s)),
        }
    }
}
