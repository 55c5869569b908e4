// Static page content. Everything here is compiled in and never mutated.

pub const BRAND: &str = "TP.HUB";
pub const BRAND_YEAR: &str = "2026";
pub const COPYRIGHT: &str = "© 2026 Team Project Hub. All rights reserved.";

pub const TITLE_HOME: &str = "TP.HUB 2026";
pub const TITLE_TEAM: &str = "TP.HUB 2026 · Team";

/// Element id the hero's browse button scrolls to.
pub const PROJECTS_ANCHOR: &str = "projects";

pub const FOOTER_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Contact Support"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Sky,
    Indigo,
    Violet,
    Emerald,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Sky => "theme-sky",
            Theme::Indigo => "theme-indigo",
            Theme::Violet => "theme-violet",
            Theme::Emerald => "theme-emerald",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    /// In-page anchor, e.g. `#project-a`.
    Anchor(&'static str),
    /// Opens in a separate browsing context.
    External(&'static str),
}

impl ProjectLink {
    pub fn href(self) -> &'static str {
        match self {
            ProjectLink::Anchor(h) | ProjectLink::External(h) => h,
        }
    }

    pub fn is_external(self) -> bool {
        matches!(self, ProjectLink::External(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: ProjectLink,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub role: &'static str,
    pub name: &'static str,
    pub initial: char,
    pub color: Theme,
    pub project: &'static str,
}

pub const PROJECTS: [ProjectEntry; 4] = [
    ProjectEntry {
        number: "01",
        title: "A 프로젝트",
        description: "사용자 경험을 혁신하는 차세대 웹 플랫폼 기획 및 디자인",
        link: ProjectLink::Anchor("#project-a"),
        theme: Theme::Sky,
    },
    ProjectEntry {
        number: "02",
        title: "B 프로젝트",
        description: "빅데이터 기반의 실시간 분석 및 시각화 대시보드",
        link: ProjectLink::Anchor("#project-b"),
        theme: Theme::Indigo,
    },
    ProjectEntry {
        number: "03",
        title: "C 프로젝트 1",
        description: "직관적인 인터페이스와 마이크로 인터랙션 구현",
        link: ProjectLink::Anchor("#project-c1"),
        theme: Theme::Violet,
    },
    ProjectEntry {
        number: "04",
        title: "C 프로젝트 2",
        description: "안정적인 서버 아키텍처 및 고성능 네트워크 시스템",
        link: ProjectLink::External("https://github.com/"),
        theme: Theme::Emerald,
    },
];

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        role: "팀장",
        name: "홍길동",
        initial: 'H',
        color: Theme::Sky,
        project: "A 프로젝트",
    },
    TeamMember {
        role: "팀원",
        name: "김민수",
        initial: 'K',
        color: Theme::Indigo,
        project: "B 프로젝트",
    },
    TeamMember {
        role: "팀원",
        name: "이서연",
        initial: 'L',
        color: Theme::Violet,
        project: "C 프로젝트 1",
    },
    TeamMember {
        role: "팀원",
        name: "박준호",
        initial: 'P',
        color: Theme::Emerald,
        project: "C 프로젝트 2",
    },
];

/// Entry animation delay (seconds) for the `i`th project card.
pub fn project_delay(i: usize) -> f64 {
    0.1 * (i as f64 + 1.0)
}

/// Entry animation delay (seconds) for the `i`th roster card.
pub fn member_delay(i: usize) -> f64 {
    0.1 * i as f64 + 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_projects_numbered_in_order() {
        let numbers: Vec<_> = PROJECTS.iter().map(|p| p.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
    }

    #[test]
    fn exactly_one_external_project() {
        let external: Vec<_> = PROJECTS.iter().filter(|p| p.link.is_external()).collect();
        assert_eq!(external.len(), 1);
        assert!(external[0].link.href().starts_with("https://"));
        for p in PROJECTS.iter().filter(|p| !p.link.is_external()) {
            assert!(p.link.href().starts_with('#'), "{}", p.title);
        }
    }

    #[test]
    fn every_member_points_at_a_listed_project() {
        for m in TEAM {
            assert!(
                PROJECTS.iter().any(|p| p.title == m.project),
                "{} -> {}",
                m.name,
                m.project
            );
        }
    }

    #[test]
    fn one_lead_on_the_roster() {
        assert_eq!(TEAM.iter().filter(|m| m.role == "팀장").count(), 1);
    }

    #[test]
    fn staggered_delays() {
        assert!((project_delay(0) - 0.1).abs() < 1e-9);
        assert!((project_delay(3) - 0.4).abs() < 1e-9);
        assert!((member_delay(0) - 0.3).abs() < 1e-9);
        assert!((member_delay(3) - 0.6).abs() < 1e-9);
    }
}
