use super::*;
use leptos::prelude::Owner;
use links::render::render;
use links::{LinkId, LinkRecord, NoticeKind};

fn with_state(f: impl FnOnce(RwSignal<LinksState>)) {
    let owner = Owner::new();
    owner.with(|| f(RwSignal::new(LinksState::default())));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn render_replaces_view() {
    with_state(|state| {
        let mut presenter = SignalPresenter::new(state);
        let record = LinkRecord::new("Ana", "Portfolio", "https://ana.dev");
        let view = render([(LinkId::new(), &record)]);

        presenter.render(&view);

        assert_eq!(state.with_untracked(|s| s.view.cards().len()), 1);
        presenter.render(&GridView::Empty);
        assert!(state.with_untracked(|s| s.view.is_empty()));
    });
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notify_shows_notice() {
    with_state(|state| {
        let mut presenter = SignalPresenter::new(state);
        presenter.notify(Notice::error("Please enter a valid URL"));

        let notice = state.with_untracked(|s| s.notice.clone());
        let notice = notice.expect("notice shown");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(state.with_untracked(LinksState::status_text), "Please enter a valid URL");
    });
}

#[test]
fn newer_notice_replaces_older() {
    with_state(|state| {
        let mut presenter = SignalPresenter::new(state);
        presenter.notify(Notice::success("Link added"));
        presenter.notify(Notice::success("Link deleted"));

        assert_eq!(state.with_untracked(LinksState::status_text), "Link deleted");
    });
}
