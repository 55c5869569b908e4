use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

/// Which of the two content trees is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Home,
    Team,
}

impl ViewMode {
    pub fn go_home(&mut self) {
        *self = ViewMode::Home;
    }

    pub fn go_team(&mut self) {
        *self = ViewMode::Team;
    }

    /// Key for the mode's root node, so a swap remounts the tree and the
    /// entry animation replays.
    pub fn key(self) -> &'static str {
        match self {
            ViewMode::Home => "main",
            ViewMode::Team => "team",
        }
    }

    pub fn document_title(self) -> &'static str {
        match self {
            ViewMode::Home => crate::content::TITLE_HOME,
            ViewMode::Team => crate::content::TITLE_TEAM,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Home => f.write_str("home"),
            ViewMode::Team => f.write_str("team"),
        }
    }
}

/// A user selection that may change the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    NavBrand,
    NavAbout,
    NavProjects,
    NavTeam,
    HeroTeamIntro,
    Back,
}

impl Trigger {
    #[cfg(test)]
    pub fn all() -> [Trigger; 6] {
        [
            Trigger::NavBrand,
            Trigger::NavAbout,
            Trigger::NavProjects,
            Trigger::NavTeam,
            Trigger::HeroTeamIntro,
            Trigger::Back,
        ]
    }

    pub fn target(self) -> ViewMode {
        match self {
            Trigger::NavTeam | Trigger::HeroTeamIntro => ViewMode::Team,
            Trigger::NavBrand | Trigger::NavAbout | Trigger::NavProjects | Trigger::Back => {
                ViewMode::Home
            }
        }
    }

    pub fn apply(self, mode: &mut ViewMode) {
        match self.target() {
            ViewMode::Home => mode.go_home(),
            ViewMode::Team => mode.go_team(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Trigger::NavBrand => "nav brand",
            Trigger::NavAbout => "nav about",
            Trigger::NavProjects => "nav projects",
            Trigger::NavTeam => "nav team",
            Trigger::HeroTeamIntro => "hero team intro",
            Trigger::Back => "back",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Reducible for ViewMode {
    type Action = Trigger;

    fn reduce(self: Rc<Self>, trigger: Trigger) -> Rc<Self> {
        let mut next = *self;
        trigger.apply(&mut next);
        if next == *self {
            // unchanged: keep the same Rc so nothing re-renders
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(seq: &[Trigger]) -> ViewMode {
        *seq.iter().fold(Rc::new(ViewMode::default()), |m, t| m.reduce(*t))
    }

    #[test]
    fn fresh_session_starts_home() {
        assert_eq!(ViewMode::default(), ViewMode::Home);
    }

    #[test]
    fn go_team_then_go_home() {
        let mut mode = ViewMode::default();
        mode.go_team();
        assert_eq!(mode, ViewMode::Team);
        mode.go_home();
        assert_eq!(mode, ViewMode::Home);
    }

    #[test]
    fn go_home_from_home_is_a_noop() {
        let start = Rc::new(ViewMode::Home);
        let next = Rc::clone(&start).reduce(Trigger::NavBrand);
        assert_eq!(*next, ViewMode::Home);
        assert!(Rc::ptr_eq(&start, &next));
    }

    #[test]
    fn trigger_table() {
        assert_eq!(Trigger::NavTeam.target(), ViewMode::Team);
        assert_eq!(Trigger::HeroTeamIntro.target(), ViewMode::Team);
        assert_eq!(Trigger::NavBrand.target(), ViewMode::Home);
        assert_eq!(Trigger::NavAbout.target(), ViewMode::Home);
        assert_eq!(Trigger::NavProjects.target(), ViewMode::Home);
        assert_eq!(Trigger::Back.target(), ViewMode::Home);
    }

    #[test]
    fn alternating_sequence_ends_on_team() {
        assert_eq!(
            run(&[Trigger::NavTeam, Trigger::Back, Trigger::HeroTeamIntro]),
            ViewMode::Team
        );
    }

    #[test]
    fn last_trigger_wins_for_every_pair_and_triple() {
        let all = Trigger::all();
        for a in all {
            for b in all {
                assert_eq!(run(&[a, b]), b.target(), "{a} then {b}");
                for c in all {
                    assert_eq!(run(&[a, b, c]), c.target(), "{a}, {b}, {c}");
                }
            }
        }
    }

    #[test]
    fn every_mode_from_every_trigger_is_one_of_two() {
        for t in Trigger::all() {
            for start in [ViewMode::Home, ViewMode::Team] {
                let next = *Rc::new(start).reduce(t);
                assert!(matches!(next, ViewMode::Home | ViewMode::Team));
                assert_eq!(next, t.target());
            }
        }
    }

    #[test]
    fn keys_and_titles_differ_per_mode() {
        assert_ne!(ViewMode::Home.key(), ViewMode::Team.key());
        assert_ne!(ViewMode::Home.document_title(), ViewMode::Team.document_title());
        assert_eq!(ViewMode::Team.to_string(), "team");
    }
}
