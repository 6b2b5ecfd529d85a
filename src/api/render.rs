//! Server-side HTML for the single recommendation page.

use crate::models::MovieDetail;

pub const PAGE_TITLE: &str = "Movie Recommender";
pub const HEADING: &str = "Movie Recommender System";

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
select { min-width: 320px; padding: 0.3rem; }
.info { background: #e8f0fe; border-left: 4px solid #1a73e8; padding: 0.75rem 1rem; margin: 1rem 0; }
.movie { display: grid; grid-template-columns: 1fr 2fr; gap: 1.5rem; margin: 1.5rem 0; }
.movie img { width: 100%; border-radius: 4px; }
.poster-missing { background: #eee; aspect-ratio: 2 / 3; display: flex; align-items: center; justify-content: center; color: #888; }
details { margin: 0.5rem 0; border: 1px solid #ddd; border-radius: 4px; padding: 0.4rem 0.8rem; }
summary { cursor: pointer; }
"#;

/// Everything the page shows for one response
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub titles: Vec<&'a str>,
    pub selected: Option<&'a str>,
    pub recommendations: Option<&'a [MovieDetail]>,
    pub message: Option<&'a str>,
}

/// Escapes text for HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_options(titles: &[&str], selected: Option<&str>) -> String {
    titles
        .iter()
        .map(|title| {
            let marker = if Some(*title) == selected {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                escape(title),
                marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "Actor: a, b, c." style line; an empty list renders as "none"
fn credit_line(label: &str, names: &[String]) -> String {
    let joined = if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    };
    format!("<p>{}: {}.</p>", label, escape(&joined))
}

fn runtime_line(runtime: Option<u32>) -> String {
    match runtime {
        Some(minutes) => format!("<p>Runtime: {} mins.</p>", minutes),
        None => "<p>Runtime: unknown.</p>".to_string(),
    }
}

/// One recommended movie: poster, title and the two collapsible sections
pub fn render_movie(movie: &MovieDetail) -> String {
    let poster = match &movie.poster {
        Some(url) => format!(
            r#"<img src="{}" alt="{} poster">"#,
            escape(url),
            escape(&movie.title)
        ),
        None => r#"<div class="poster-missing">No poster</div>"#.to_string(),
    };

    let title = match &movie.homepage {
        Some(homepage) => format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            escape(homepage),
            escape(&movie.title)
        ),
        None => escape(&movie.title),
    };

    let overview = movie.overview.as_deref().unwrap_or("No overview available.");

    format!(
        r#"<article class="movie">
<div>{poster}</div>
<div>
<h3>{title}</h3>
<details><summary>Description</summary><p>{overview}</p></details>
<details><summary>More Detail</summary>{actors}{directors}{runtime}</details>
</div>
</article>"#,
        poster = poster,
        title = title,
        overview = escape(overview),
        actors = credit_line("Actor", &movie.actors),
        directors = credit_line("Director", &movie.directors),
        runtime = runtime_line(movie.runtime),
    )
}

/// Renders the full page
pub fn render_page(view: &PageView<'_>) -> String {
    let selected = view.selected.or_else(|| view.titles.first().copied());

    let selection = selected
        .map(|title| format!("<p>You selected: <strong>{}</strong></p>", escape(title)))
        .unwrap_or_default();

    let message = view
        .message
        .map(|msg| format!(r#"<div class="info">{}</div>"#, escape(msg)))
        .unwrap_or_default();

    let results = view
        .recommendations
        .map(|movies| movies.iter().map(render_movie).collect::<Vec<_>>().join("\n"))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{page_title}</title>
<style>{style}</style>
</head>
<body>
<h1>{heading}</h1>
<form method="post" action="/recommend">
<label for="movie">Select a movie</label>
<select id="movie" name="movie">
{options}
</select>
<button type="submit">Recommend</button>
</form>
{selection}
{message}
<section class="results">
{results}
</section>
</body>
</html>
"#,
        page_title = PAGE_TITLE,
        style = STYLE,
        heading = HEADING,
        options = render_options(&view.titles, selected),
        selection = selection,
        message = message,
        results = results,
    )
}
