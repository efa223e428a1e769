use crate::catalog::Movie;

/// Marker replaced by the rendered movie grid.
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

/// Page skeleton; expects a `style.css` next to the output file.
pub const PAGE_TEMPLATE: &str = r#"<html>
<head>
    <title>Movie Library</title>
    <link rel="stylesheet" href="style.css"/>
</head>
<body>
    <div class="list-movies-title">
        <h1>Movie Library</h1>
    </div>
    <div>
        <ol class="movie-grid">
            __TEMPLATE_MOVIE_GRID__
        </ol>
    </div>
</body>
</html>
"#;

const EMPTY_GRID: &str = "<p>No movies in the database.</p>";

/// Render the full page for `movies`.
pub fn render_html(movies: &[Movie], placeholder_poster: &str) -> String {
    let grid = if movies.is_empty() {
        EMPTY_GRID.to_string()
    } else {
        movies
            .iter()
            .map(|m| render_movie(m, placeholder_poster))
            .collect::<Vec<_>>()
            .join("\n")
    };

    PAGE_TEMPLATE.replace(GRID_PLACEHOLDER, &grid)
}

fn render_movie(movie: &Movie, placeholder_poster: &str) -> String {
    let poster = movie
        .poster_url
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(placeholder_poster);
    let title = escape_html(&movie.title);

    format!(
        r#"<li>
                <div class="movie">
                    <img class="movie-poster" src="{poster}" alt="Poster of {title}"/>
                    <div class="movie-title">{title}</div>
                    <div class="movie-year">{year}</div>
                </div>
            </li>"#,
        poster = escape_html(poster),
        title = title,
        year = movie.year,
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
