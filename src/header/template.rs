use crate::theme::Theme;

/// Values substituted into the card body
pub struct Fields<'a> {
    pub label: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub day: &'a str,
    pub time: &'a str,
    pub title: &'a str,
    pub link_html: &'a str,
    pub keywords: &'a str,
}

/// The `<style>` block. Classes are prefixed `hc-` so they don't collide with notebook CSS.
pub fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"<style>
.hc-wrapper {{
    display: flex;
    align-items: center;
    font-family: 'Georgia', serif;
    border-left: 3px solid {rule};
    padding-left: 12px;
    margin-top: 1em;
    margin-bottom: 1em;
    gap: 20px;
}}
.hc-calendar {{
    display: inline-block;
    font-family: 'Arial', sans-serif;
    border-radius: 8px;
    overflow: hidden;
    background: {card_bg};
    box-shadow: 0 2px 6px rgba(0,0,0,0.3);
    width: 120px;
    font-size: 12px;
    text-align: center;
    flex-shrink: 0;
    border: 1px solid {card_border};
}}
.hc-header {{
    background: {band_bg};
    color: {band_text};
    padding: 4px 0;
    font-weight: bold;
    font-size: 11px;
}}
.hc-month {{
    background: {accent};
    color: {month_text};
    padding: 5px 0;
    font-weight: bold;
}}
.hc-day {{
    background: {day_bg};
    color: {day_text};
    padding: 8px 0;
    font-size: 20px;
    font-weight: bold;
}}
.hc-time {{
    background: {band_bg};
    color: {time_text};
    padding: 4px 0;
    font-size: 12px;
}}
.hc-title {{
    margin: 0;
    color: {accent};
    font-size: 1.8em;
    font-weight: 500;
    line-height: 1.2em;
    word-break: break-word;
}}
.hc-keywords {{
    margin: 0.5em 0 0 0;
    font-size: 0.9em;
    opacity: 0.8;
}}
.hc-link {{
    margin-left: 8px;
    font-size: 0.8em;
    color: {accent} !important;
    text-decoration: none !important;
}}
.hc-link:hover {{
    color: {accent} !important;
    text-decoration: none !important;
}}
</style>"#,
        rule = theme.rule,
        card_bg = theme.card_bg,
        card_border = theme.card_border,
        band_bg = theme.band_bg,
        band_text = theme.band_text,
        accent = theme.accent,
        month_text = theme.month_text,
        day_bg = theme.day_bg,
        day_text = theme.day_text,
        time_text = theme.time_text,
    )
}

/// Calendar card on the left, title and keywords on the right
pub fn body(fields: &Fields<'_>) -> String {
    format!(
        r#"<div class="hc-wrapper">
    <!-- Calendar -->
    <div class="hc-calendar">
        <div class="hc-header">{label}</div>
        <div class="hc-month">{month}, {year}</div>
        <div class="hc-day">{day}</div>
        <div class="hc-time">{time}</div>
    </div>

    <!-- Header text -->
    <div style="flex: 1;">
        <div class="hc-title">{title} {link_html}</div>
        <p class="hc-keywords">{keywords}</p>
    </div>
</div>"#,
        label = fields.label,
        month = fields.month,
        year = fields.year,
        day = fields.day,
        time = fields.time,
        title = fields.title,
        link_html = fields.link_html,
        keywords = fields.keywords,
    )
}
