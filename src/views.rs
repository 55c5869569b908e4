// Presentational components. None of these own state: every selection is
// handed back to the controller as a `Trigger`.

use gloo::console::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{
    member_delay, project_delay, ProjectEntry, TeamMember, BRAND, BRAND_YEAR, COPYRIGHT,
    FOOTER_LINKS, PROJECTS, PROJECTS_ANCHOR, TEAM,
};
use crate::mode::{Trigger, ViewMode};

// Which trigger each control sends.
const BRAND_TRIGGER: Trigger = Trigger::NavBrand;
const NAV_LINKS: [(&str, Trigger); 3] = [
    ("About", Trigger::NavAbout),
    ("Projects", Trigger::NavProjects),
    ("Team", Trigger::NavTeam),
];
const HERO_TEAM_TRIGGER: Trigger = Trigger::HeroTeamIntro;
const BACK_TRIGGER: Trigger = Trigger::Back;

fn on_click(on_trigger: &Callback<Trigger>, trigger: Trigger) -> Callback<MouseEvent> {
    on_trigger.reform(move |_: MouseEvent| trigger)
}

fn scroll_to_projects() {
    let Some(doc) = window().and_then(|w| w.document()) else { return; };
    let Some(el) = doc.get_element_by_id(PROJECTS_ANCHOR) else {
        warn!(format!("no #{PROJECTS_ANCHOR} section to scroll to"));
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn brand_mark() -> Html {
    html! {
        <>
            { BRAND }{ " " }<span class="accent">{ BRAND_YEAR }</span>
        </>
    }
}

/* ---------- Nav ---------- */

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub mode: ViewMode,
    pub on_trigger: Callback<Trigger>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavProps) -> Html {
    html! {
        <nav class="nav">
            <div class="nav-inner">
                <span class="brand" onclick={on_click(&props.on_trigger, BRAND_TRIGGER)}>
                    { brand_mark() }
                </span>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|&(label, trigger)| {
                        let active = props.mode == ViewMode::Team && trigger.target() == ViewMode::Team;
                        html! {
                            <span
                                key={label}
                                class={classes!("nav-link", active.then_some("active"))}
                                onclick={on_click(&props.on_trigger, trigger)}
                            >
                                { label }
                            </span>
                        }
                    }) }
                    // intentionally inert
                    <button class="nav-contact">{ "Contact" }</button>
                </div>
            </div>
        </nav>
    }
}

/* ---------- Home ---------- */

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_trigger: Callback<Trigger>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeProps) -> Html {
    html! {
        <>
            <Hero on_trigger={props.on_trigger.clone()} />
            <ProjectGrid />
            <Footer />
        </>
    }
}

#[function_component(Hero)]
fn hero(props: &HomeProps) -> Html {
    let on_browse = Callback::from(|_: MouseEvent| scroll_to_projects());

    html! {
        <section class="hero">
            <div class="hero-blobs">
                <div class="blob blob-a" />
                <div class="blob blob-b" />
                <div class="blob blob-c" />
            </div>

            <div class="hero-inner">
                <div class="hero-copy rise">
                    <div class="pill">
                        <span class="pulse-dot" />
                        <span>{ "2026 Team Project" }</span>
                    </div>

                    <h1>
                        { "2026 팀 프로젝트" }<br />
                        <span class="gradient-text">{ "통합 플랫폼" }</span>
                    </h1>

                    <p class="lede">
                        { "각 팀원의 결과물을 하나의 공간에서 연결하고 확장합니다." }<br />
                        { "우리의 비전과 기술이 담긴 프로젝트를 만나보세요." }
                    </p>

                    <div class="hero-actions">
                        <button class="btn btn-dark" onclick={on_browse}>
                            { "프로젝트 둘러보기" }<span class="icon">{ "→" }</span>
                        </button>
                        <button class="btn btn-light" onclick={on_click(&props.on_trigger, HERO_TEAM_TRIGGER)}>
                            { "팀 소개" }
                        </button>
                    </div>
                </div>

                <div class="hero-panel zoom">
                    <div class="panel-grid">
                        { for (0..24).map(|i| html! { <div key={i} class="panel-tile" /> }) }
                    </div>
                    <div class="panel-card">
                        <div class="panel-icon">{ "↗" }</div>
                        <h3>{ "Innovation Hub" }</h3>
                        <p>{ "Connecting Ideas & Technology" }</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProjectGrid)]
fn project_grid() -> Html {
    html! {
        <section id={PROJECTS_ANCHOR} class="projects">
            <div class="container">
                <div class="section-head rise">
                    <h2>{ "Featured Projects" }</h2>
                    <div class="underline" />
                </div>

                <div class="card-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, p)| html! {
                        <ProjectCard key={p.number} entry={*p} index={i} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub entry: ProjectEntry,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let p = props.entry;
    let class = classes!("project-card", p.theme.class(), "rise");
    let style = format!("animation-delay: {:.1}s", project_delay(props.index));

    let body = html! {
        <>
            <div class="card-top">
                <span class="card-number">{ p.number }</span>
                <div class="card-arrow">{ "↗" }</div>
            </div>
            <div class="card-body">
                <div class="card-rule" />
                <h3>{ p.title }</h3>
                <p>{ p.description }</p>
            </div>
            <div class="card-glow" />
        </>
    };

    if p.link.is_external() {
        html! {
            <a class={class} style={style} href={p.link.href()} target="_blank" rel="noopener noreferrer">
                { body }
            </a>
        }
    } else {
        html! {
            <a class={class} style={style} href={p.link.href()}>
                { body }
            </a>
        }
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div>
                    <span class="brand">{ brand_mark() }</span>
                    <p class="small">{ COPYRIGHT }</p>
                </div>
                <div class="footer-links">
                    { for FOOTER_LINKS.iter().map(|l| html! { <a key={*l} href="#">{ *l }</a> }) }
                </div>
            </div>
        </footer>
    }
}

/* ---------- Team ---------- */

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub on_trigger: Callback<Trigger>,
}

#[function_component(TeamView)]
pub fn team_view(props: &TeamProps) -> Html {
    html! {
        <section class="team">
            <div class="container narrow">
                <button class="back" onclick={on_click(&props.on_trigger, BACK_TRIGGER)}>
                    <span class="icon">{ "←" }</span>{ "메인으로 돌아가기" }
                </button>

                <div class="team-head">
                    <h2>{ "우리 팀을 소개합니다" }</h2>
                    <p>{ "함께 기획하고, 개발하고, 완성한 팀원들" }</p>
                </div>

                <div class="card-grid">
                    { for TEAM.iter().enumerate().map(|(i, m)| html! {
                        <MemberCard key={m.name} member={*m} index={i} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MemberCardProps {
    pub member: TeamMember,
    pub index: usize,
}

#[function_component(MemberCard)]
pub fn member_card(props: &MemberCardProps) -> Html {
    let m = props.member;
    let style = format!("animation-delay: {:.1}s", member_delay(props.index));

    html! {
        <div class={classes!("member-card", m.color.class(), "rise")} style={style}>
            <div class="avatar">{ m.initial.to_string() }</div>
            <span class="role">{ m.role }</span>
            <h3>{ m.name }</h3>
            <p class="small">{ m.project }</p>
        </div>
    }
}
