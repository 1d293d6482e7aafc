use maud::{html, Markup, DOCTYPE};

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #1f2937; background: #f9fafb; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
header h3 { margin: 0; }
.page { display: flex; align-items: flex-start; }
aside.sidebar { position: sticky; top: 0; width: 280px; flex-shrink: 0; padding: 1.25rem; background: #fff; border-right: 1px solid #e5e7eb; min-height: 100vh; box-sizing: border-box; }
aside.sidebar h2 { font-size: 1.1rem; margin-top: 0; }
.slider { margin-bottom: 1.25rem; }
.slider label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
.slider input[type=range] { width: 100%; }
.slider .values { font-size: 0.85rem; color: #6b7280; }
main.container { flex: 1; padding: 1.5rem 2rem; min-width: 0; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1.5rem; }
.card h2 { font-size: 1.2rem; margin-top: 0; }
.tiles { display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem; }
.tile { flex: 1; min-width: 140px; padding: 0.75rem; border-radius: 6px; background: #f3f4f6; }
.tile .label { font-size: 0.8rem; color: #6b7280; }
.tile .value { font-size: 1.2rem; font-weight: 600; }
.table-wrap { max-height: 420px; overflow: auto; border: 1px solid #e5e7eb; border-radius: 6px; }
table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
th { position: sticky; top: 0; background: #f9fafb; text-align: left; padding: 8px; border-bottom: 2px solid #e5e7eb; }
td { padding: 6px 8px; border-bottom: 1px solid #f3f4f6; }
td.num, th.num { text-align: right; }
.muted { color: #6b7280; font-size: 0.85rem; }
.actions a { margin-right: 1rem; }
svg.chart { width: 100%; height: auto; }
"#;

pub fn desktop_layout(title: &str, sidebar: Option<Markup>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLES)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Real Estate Price Analysis" }
                }
                div class="page" {
                    @if let Some(sidebar) = sidebar {
                        aside class="sidebar" { (sidebar) }
                    }
                    main class="container" { (content) }
                }
            }
        }
    }
}
