//! Server-rendered markup for the recommendation page.
//!
//! Every page is rendered from a [`RecommendForm`] snapshot: the form with
//! its submit control, then the error panel or the result section, never
//! both. The body renders first so the head's style block carries every rule
//! the body registered.

use client_core::RecommendForm;
use shared::protocol::{CourseItem, RecommendResponse};

use crate::style::{StyleRegistry, StyledClass};

const PAGE_TITLE: &str = "재미좀 볼래";
const PAGE_DESCRIPTION: &str = "MCPTOOL course recommendation service";
const QUERY_PLACEHOLDER: &str = "어떤 여행을 원하시나요? 예: '강릉으로 떠나는 힐링 여행'";
const SUBMIT_LABEL: &str = "코스 추천받기";
const SUBMIT_PENDING_LABEL: &str = "추천받는 중...";
const SUMMARY_HEADING: &str = "여행 요약";
const COURSES_HEADING: &str = "추천 코스";
const ADDRESS_LABEL: &str = "주소";
const TIME_LABEL: &str = "예상 소요 시간";

const CONTAINER: StyledClass = StyledClass {
    name: "container",
    rules: ".container{display:flex;flex-direction:column;align-items:center;padding:2rem;min-height:100vh;background-color:#f0f2f5;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,'Helvetica Neue',Arial,sans-serif}",
};

const TITLE: StyledClass = StyledClass {
    name: "title",
    rules: ".title{font-size:3rem;color:#1a1a1a;margin-bottom:2rem;text-align:center}",
};

const QUERY_FORM: StyledClass = StyledClass {
    name: "query-form",
    rules: ".query-form{display:flex;flex-direction:column;width:100%;max-width:600px;margin-bottom:2rem}",
};

const QUERY_INPUT: StyledClass = StyledClass {
    name: "query-input",
    rules: ".query-input{width:100%;min-height:100px;padding:.75rem;font-size:1rem;border:1px solid #ccc;border-radius:8px;margin-bottom:1rem;resize:vertical;box-sizing:border-box}",
};

const SUBMIT_BUTTON: StyledClass = StyledClass {
    name: "submit-button",
    rules: ".submit-button{padding:.75rem 1.5rem;font-size:1rem;font-weight:600;color:#fff;background-color:#0070f3;border:none;border-radius:8px;cursor:pointer;transition:background-color .2s,transform .1s} .submit-button:hover{background-color:#005bb5} .submit-button:active{transform:scale(.98)} .submit-button:disabled{background-color:#a0a0a0;cursor:not-allowed}",
};

const RESULT_SECTION: StyledClass = StyledClass {
    name: "result-section",
    rules: ".result-section{width:100%;max-width:600px;background-color:#fff;border-radius:8px;padding:1.5rem;box-shadow:0 4px 12px rgba(0,0,0,.1)}",
};

const SUMMARY: StyledClass = StyledClass {
    name: "summary",
    rules: ".summary{margin-bottom:1.5rem} .summary h2{font-size:1.5rem;margin-bottom:.5rem} .summary p{font-size:1rem;line-height:1.6;color:#333}",
};

const COURSE_LIST: StyledClass = StyledClass {
    name: "course-list",
    rules: ".course-list{list-style:none;padding:0}",
};

const COURSE_CARD: StyledClass = StyledClass {
    name: "course-card",
    rules: ".course-card{background-color:#f9f9f9;border:1px solid #eee;border-radius:8px;padding:1rem;margin-bottom:1rem} .course-card h3{font-size:1.25rem;margin-bottom:.5rem;color:#0070f3} .course-card p{font-size:.9rem;line-height:1.5;margin-bottom:.25rem;color:#555}",
};

const ERROR_MESSAGE: StyledClass = StyledClass {
    name: "error-message",
    rules: ".error-message{color:#d32f2f;background-color:#ffcdd2;border:1px solid #ef9a9a;border-radius:8px;padding:1rem;margin-top:1rem}",
};

/// Renders the full document for one form snapshot. The style registry lives
/// and dies inside this call frame.
pub fn render_page(form: &RecommendForm) -> String {
    let mut styles = StyleRegistry::new();
    let body = render_body(form, &mut styles);
    let style_tag = styles.into_style_tag();

    format!(
        "<!DOCTYPE html>\
         <html lang=\"ko\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
         <title>{PAGE_TITLE}</title>\
         <meta name=\"description\" content=\"{PAGE_DESCRIPTION}\">\
         {style_tag}\
         </head>\
         <body>{body}</body>\
         </html>"
    )
}

fn render_body(form: &RecommendForm, styles: &mut StyleRegistry) -> String {
    let mut sections = render_form(form, styles);
    if let Some(error) = &form.error {
        sections.push_str(&render_error(error, styles));
    }
    if let Some(result) = &form.result {
        sections.push_str(&render_result(result, styles));
    }

    format!(
        "<div class=\"{container}\"><h1 class=\"{title}\">{PAGE_TITLE}</h1>{sections}</div>",
        container = CONTAINER.class(styles),
        title = TITLE.class(styles),
    )
}

fn render_form(form: &RecommendForm, styles: &mut StyleRegistry) -> String {
    let disabled = if form.loading || form.query.is_empty() {
        " disabled"
    } else {
        ""
    };
    let label = if form.loading {
        SUBMIT_PENDING_LABEL
    } else {
        SUBMIT_LABEL
    };

    format!(
        "<form class=\"{form_class}\" action=\"/recommend\" method=\"post\">\
         <textarea class=\"{input}\" name=\"query\" placeholder=\"{placeholder}\">{query}</textarea>\
         <button class=\"{button}\" type=\"submit\"{disabled}>{label}</button>\
         </form>",
        form_class = QUERY_FORM.class(styles),
        input = QUERY_INPUT.class(styles),
        placeholder = escape_html(QUERY_PLACEHOLDER),
        query = escape_html(&form.query),
        button = SUBMIT_BUTTON.class(styles),
    )
}

fn render_error(error: &str, styles: &mut StyleRegistry) -> String {
    format!(
        "<div class=\"{class}\">{text}</div>",
        class = ERROR_MESSAGE.class(styles),
        text = escape_html(error),
    )
}

fn render_result(result: &RecommendResponse, styles: &mut StyleRegistry) -> String {
    let cards: String = result
        .courses
        .iter()
        .map(|item| render_course(item, styles))
        .collect();

    format!(
        "<div class=\"{section}\">\
         <div class=\"{summary}\"><h2>{SUMMARY_HEADING}</h2><p>{text}</p></div>\
         <h2>{COURSES_HEADING}</h2>\
         <ul class=\"{list}\">{cards}</ul>\
         </div>",
        section = RESULT_SECTION.class(styles),
        summary = SUMMARY.class(styles),
        text = escape_html(&result.summary),
        list = COURSE_LIST.class(styles),
    )
}

fn render_course(item: &CourseItem, styles: &mut StyleRegistry) -> String {
    format!(
        "<li class=\"{card}\">\
         <h3>{name} ({kind})</h3>\
         <p>{description}</p>\
         <p><strong>{ADDRESS_LABEL}:</strong> {address}</p>\
         <p><strong>{TIME_LABEL}:</strong> {time}</p>\
         </li>",
        card = COURSE_CARD.class(styles),
        name = escape_html(&item.name),
        kind = escape_html(&item.kind),
        description = escape_html(&item.description),
        address = escape_html(&item.address),
        time = escape_html(&item.time),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> RecommendResponse {
        RecommendResponse {
            summary: "S".to_string(),
            courses: vec![
                CourseItem {
                    name: "A".to_string(),
                    description: "d".to_string(),
                    address: "addr".to_string(),
                    kind: "t".to_string(),
                    time: "1h".to_string(),
                },
                CourseItem {
                    name: "B".to_string(),
                    description: "d2".to_string(),
                    address: "addr2".to_string(),
                    kind: "카페".to_string(),
                    time: "30m".to_string(),
                },
            ],
        }
    }

    #[test]
    fn idle_page_has_a_disabled_button_and_no_panels() {
        let page = render_page(&RecommendForm::new());

        assert!(page.contains("type=\"submit\" disabled"));
        assert!(page.contains(SUBMIT_LABEL));
        assert!(!page.contains("error-message\""));
        assert!(!page.contains("result-section\""));
    }

    #[test]
    fn typed_query_enables_the_button() {
        let form = RecommendForm::with_query("barrier island trip");
        let page = render_page(&form);

        assert!(!page.contains("type=\"submit\" disabled"));
        assert!(page.contains(">barrier island trip</textarea>"));
    }

    #[test]
    fn pending_page_disables_the_button_and_swaps_the_label() {
        let mut form = RecommendForm::with_query("trip");
        form.loading = true;
        let page = render_page(&form);

        assert!(page.contains("type=\"submit\" disabled"));
        assert!(page.contains(SUBMIT_PENDING_LABEL));
        assert!(!page.contains(SUBMIT_LABEL));
    }

    #[test]
    fn result_page_lists_summary_then_cards_in_response_order() {
        let mut form = RecommendForm::with_query("trip");
        form.result = Some(sample_result());
        let page = render_page(&form);

        assert!(page.contains(SUMMARY_HEADING));
        assert!(page.contains(COURSES_HEADING));
        assert!(page.contains("<h3>A (t)</h3>"));
        assert!(page.contains("<h3>B (카페)</h3>"));
        let first = page.find("<h3>A").expect("first card");
        let second = page.find("<h3>B").expect("second card");
        assert!(first < second);
        assert!(!page.contains("error-message\""));
    }

    #[test]
    fn error_page_shows_only_the_error_panel() {
        let mut form = RecommendForm::with_query("trip");
        form.error = Some("no courses found".to_string());
        let page = render_page(&form);

        assert!(page.contains("no courses found"));
        assert!(page.contains("error-message\""));
        assert!(!page.contains("result-section\""));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let mut form = RecommendForm::with_query("<script>alert(1)</script>");
        form.error = Some("detail with <b>markup</b> & \"quotes\"".to_string());
        let page = render_page(&form);

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("detail with &lt;b&gt;markup&lt;/b&gt; &amp; &quot;quotes&quot;"));
    }

    #[test]
    fn style_block_lands_in_the_head_with_every_registered_class() {
        let mut form = RecommendForm::with_query("trip");
        form.result = Some(sample_result());
        let page = render_page(&form);

        let head_end = page.find("</head>").expect("head");
        let style_start = page.find("<style data-css=").expect("style tag");
        assert!(style_start < head_end);

        let style_end = page.find("</style>").expect("style end");
        let style_block = &page[style_start..style_end];
        for class in [
            "container",
            "title",
            "query-form",
            "query-input",
            "submit-button",
            "result-section",
            "summary",
            "course-list",
            "course-card",
        ] {
            assert!(style_block.contains(class), "missing {class}");
        }
        // Two cards, one rule.
        assert_eq!(style_block.matches(".course-card{").count(), 1);
    }
}
