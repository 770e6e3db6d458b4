use maud::{html, Markup, DOCTYPE};

/// Takes 'content' and wraps the standard header, body and footer around it.
pub fn page(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html class="no-js" lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Healthcare Dashboard" }
                script src="/assets/form.js" defer {}
                link href="/assets/app.css" rel="stylesheet" type="text/css" {}
            }
            body {
                h1 { "Healthcare Dashboard" }
                (content)
            }
        }
    }
}
