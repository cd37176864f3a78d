use super::*;

async fn composer() -> PageComposer {
    let content = PageContent::load(None, None).await.expect("embedded content should load");
    PageComposer::new(Arc::new(content), Arc::new(StyleSheet::embedded()))
}

#[tokio::test]
async fn overview_renders_exactly_the_three_cards() {
    let html = composer().await.render_overview();

    assert_eq!(html.matches(r#"class="card""#).count(), 3);
    assert_eq!(html.matches("card__title").count(), 3);
    assert!(html.contains(r#"<h4 class="card__title">Why need this system?</h4>"#));
    assert!(html.contains(r#"<h5 class="card__title">Key Stats and risk</h5>"#));
    assert!(html.contains(r#"<h6 class="card__title">common crash types</h6>"#));
}

#[tokio::test]
async fn overview_renders_gradient_title_and_card_weights() {
    let html = composer().await.render_overview();

    assert!(html.contains(r#"<h1 class="header__title">WareHouse Sensor Readings</h1>"#));
    assert!(html.contains("flex:6.75"));
    assert!(html.contains("flex:5.55"));
    assert!(html.contains("flex:6.69"));
    // Single-entry body is a paragraph, multi-entry bodies are lists.
    assert_eq!(html.matches("<ul>").count(), 2);
    assert_eq!(html.matches("<li>").count(), 7);
}

#[tokio::test]
async fn analysis_renders_literal_route_coordinates() {
    let html = composer().await.render_exploratory_analysis();

    assert!(html.contains("[-1.0987, 37.0084]"));
    assert!(html.contains("[-1.286389, 36.817223]"));
    assert!(html.contains("route-map__line"));
    assert_eq!(html.matches("route-map__marker ").count(), 2);
}

#[tokio::test]
async fn analysis_renders_status_placeholder() {
    let html = composer().await.render_exploratory_analysis();
    assert!(html.contains(r#"<span class="status-box__label">Awake/Asleep</span>"#));
}

#[tokio::test]
async fn analysis_renders_markdown_prose() {
    let html = composer().await.render_exploratory_analysis();

    assert!(html.contains(r#"<h2 class="section__header">Problem Statement and Modeling Approach</h2>"#));
    assert!(html.contains("<h3>Data Overview</h3>"));
    assert!(html.contains("<strong>predictive maintenance</strong>"));
    assert!(html.contains("<code>errorID</code>"));
}

#[tokio::test]
async fn dashboard_renders_header_with_empty_body() {
    let html = composer().await.render_dashboard();

    assert!(html.contains(r#"<h2 class="section__header">Dashboard</h2>"#));
    assert!(html.contains(r#"<div class="section__body"></div>"#));
}

#[tokio::test]
async fn render_section_dispatches_by_kind() {
    let composer = composer().await;
    assert_eq!(composer.render_section(SectionKind::Overview), composer.render_overview());
    assert_eq!(composer.render_section(SectionKind::ExploratoryAnalysis), composer.render_exploratory_analysis());
    assert_eq!(composer.render_section(SectionKind::Dashboard), composer.render_dashboard());
}

#[tokio::test]
async fn rendering_is_idempotent() {
    let composer = composer().await;
    assert_eq!(composer.render_overview(), composer.render_overview());
    assert_eq!(composer.render_exploratory_analysis(), composer.render_exploratory_analysis());
    assert_eq!(composer.render_dashboard(), composer.render_dashboard());
    assert_eq!(composer.render_page("overview", Theme::Dark), composer.render_page("overview", Theme::Dark));
}

#[tokio::test]
async fn page_wraps_section_in_document() {
    let html = composer().await.render_page("exploratory-analysis", Theme::Light).unwrap();

    assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
    assert!(html.contains("<title>WareHouse Readings · Exploratory Analysis</title>"));
    assert!(html.contains(r#":root[data-theme="dark"]"#));
    assert!(html.contains("section--analysis"));
    assert!(!html.contains("section--overview"));
    assert!(html.contains("<footer>"));
}

/// The opening tag of the element carrying `needle`.
fn tag_containing<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html.find(needle).expect("needle should be present");
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}

#[tokio::test]
async fn page_tab_bar_marks_active_section() {
    let html = composer().await.render_page("dashboard", Theme::Dark).unwrap();

    let overview_tab = tag_containing(&html, r#"href="/overview?theme=dark""#);
    assert!(overview_tab.contains("tabs__tab"));
    assert!(!overview_tab.contains("tabs__tab--active"));

    let dashboard_tab = tag_containing(&html, r#"href="/dashboard?theme=dark""#);
    assert!(dashboard_tab.contains("tabs__tab--active"));
    assert_eq!(html.matches("tabs__tab tabs__tab--active").count(), 1);

    let toggle = tag_containing(&html, r#"href="/dashboard?theme=light""#);
    assert!(toggle.contains("tabs__theme"));
    assert!(html.contains("light mode"));
}

#[tokio::test]
async fn unknown_slug_renders_nothing() {
    assert!(composer().await.render_page("settings", Theme::Light).is_none());
}

#[tokio::test]
async fn index_renders_first_section() {
    let composer = composer().await;
    assert_eq!(composer.render_index(Theme::Light), composer.render_page("overview", Theme::Light));
}

#[test]
fn section_href_carries_theme() {
    assert_eq!(section_href("overview", Theme::Dark), "/overview?theme=dark");
}
