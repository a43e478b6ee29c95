//! Builds the scrollable portfolio page as styled lines.

use folio_content::Profile;
use folio_core::{Section, Theme};
use folio_effects::glow_gradient;
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

/// The page content laid out for one width.
#[derive(Debug, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    /// First line of each section, in [`Section::ALL`] order.
    pub anchors: [usize; 5],
}

impl Page {
    /// Line to scroll to for a section.
    pub fn anchor(&self, section: Section) -> usize {
        self.anchors[section.index()]
    }

    /// Section the reader is currently in, `None` while still on the hero.
    pub fn section_at(&self, scroll: usize) -> Option<Section> {
        Section::ALL
            .iter()
            .rev()
            .find(|section| self.anchor(**section) <= scroll)
            .copied()
    }
}

/// Everything needed to lay out the page for one frame.
#[derive(Debug)]
pub struct PageContext<'a> {
    pub profile: &'a Profile,
    pub theme: Theme,
    /// Usable text width in columns.
    pub width: usize,
    /// Current typewriter output.
    pub typed: &'a str,
    /// Caret drawn after the typewriter output.
    pub caret: Span<'static>,
    /// Year shown in the footer.
    pub year: i32,
}

impl PageContext<'_> {
    /// Lay the page out.
    pub fn build(&self) -> Page {
        let mut page = Page::default();
        self.hero(&mut page.lines);

        for section in Section::ALL {
            page.anchors[section.index()] = page.lines.len();
            self.heading(&mut page.lines, section);
            match section {
                Section::About => self.about(&mut page.lines),
                Section::Skills => self.skills(&mut page.lines),
                Section::Experience => self.experience(&mut page.lines),
                Section::Projects => self.projects(&mut page.lines),
                Section::Contact => self.contact(&mut page.lines),
            }
            page.lines.push(Line::default());
        }

        self.footer(&mut page.lines);
        page
    }

    fn width(&self) -> usize {
        self.width.max(10)
    }

    fn text(&self, text: &str) -> Span<'static> {
        Span::styled(text.to_string(), Style::new().fg(self.theme.foreground()))
    }

    fn muted(&self, text: &str) -> Span<'static> {
        Span::styled(text.to_string(), Style::new().fg(self.theme.muted()))
    }

    fn paragraph(&self, lines: &mut Vec<Line<'static>>, text: &str, indent: usize) {
        let pad = " ".repeat(indent);
        for row in wrap_text(text, self.width().saturating_sub(indent)) {
            lines.push(Line::from(vec![Span::raw(pad.clone()), self.muted(&row)]));
        }
    }

    fn chips(&self, lines: &mut Vec<Line<'static>>, items: &[String], indent: usize) {
        let border = Style::new().fg(self.theme.border());
        let mut spans = vec![Span::raw(" ".repeat(indent))];
        let mut used = indent;

        for item in items {
            let len = item.chars().count() + 5;
            if used > indent && used + len > self.width() {
                lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::raw(" ".repeat(indent)));
                used = indent;
            }
            spans.push(Span::styled("(", border));
            spans.push(self.text(&format!(" {item} ")));
            spans.push(Span::styled(")", border));
            spans.push(Span::raw(" "));
            used += len;
        }
        if used > indent {
            lines.push(Line::from(spans));
        }
    }

    fn rule(&self, lines: &mut Vec<Line<'static>>) {
        let width = self.width().min(48);
        let spans: Vec<Span> = (0..width)
            .map(|i| {
                let t = i as f32 / (width - 1).max(1) as f32;
                Span::styled("─", Style::new().fg(glow_gradient(t)))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    fn hero(&self, lines: &mut Vec<Line<'static>>) {
        let p = self.profile;
        let accent = self.theme.accent();

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::new().fg(accent)),
            self.muted(&p.badge),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(self.text(&p.name).bold()));
        lines.push(Line::from(self.text(&p.title)));
        lines.push(Line::default());
        self.paragraph(lines, &p.summary, 0);
        lines.push(Line::default());
        self.chips(lines, &p.chips, 0);
        lines.push(Line::default());

        lines.push(Line::from(vec![
            self.muted("[p] ").bold(),
            self.text("Ver projetos"),
            Span::raw("   "),
            self.muted("[c] ").bold(),
            self.text("Entrar em contato"),
        ]));
        lines.push(Line::default());

        self.rule(lines);
        lines.push(Line::from(self.muted("  Atuação")));
        let typed_style = Style::new().fg(self.theme.foreground()).bold();
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(self.typed.to_string(), typed_style),
            self.caret.clone(),
        ]));
        lines.push(Line::default());
        for tile in &p.focus {
            lines.push(Line::from(vec![
                Span::raw("  "),
                self.text(&tile.label).bold(),
                self.muted(&format!("  {}", tile.detail)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("  ✦ ", Style::new().fg(accent)),
            self.muted(&p.availability),
        ]));
        self.rule(lines);
        lines.push(Line::default());
        lines.push(Line::from(self.muted("↓ role para ver mais")).centered());
        lines.push(Line::default());
    }

    fn heading(&self, lines: &mut Vec<Line<'static>>, section: Section) {
        lines.push(Line::from(self.text(section.label()).bold()));
        let subtitle = section.subtitle().unwrap_or(self.profile.tagline.as_str());
        self.paragraph(lines, subtitle, 0);
        lines.push(Line::default());
    }

    fn about(&self, lines: &mut Vec<Line<'static>>) {
        let p = self.profile;
        self.paragraph(lines, &p.summary, 0);
        lines.push(Line::default());

        for company in &p.companies {
            lines.push(Line::from(self.text(&company.name).bold()));
            lines.push(Line::from(self.muted(&company.role)));
            self.paragraph(lines, &company.desc, 0);
            lines.push(Line::default());
        }

        lines.push(Line::from(self.text("Formação").bold()));
        for entry in &p.education {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::new().fg(self.theme.accent())),
                self.text(&entry.school),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                self.muted(&format!("{} — {}", entry.course, entry.status)),
            ]));
        }
    }

    fn skills(&self, lines: &mut Vec<Line<'static>>) {
        for group in &self.profile.skills {
            lines.push(Line::from(self.text(&group.label).bold()));
            self.chips(lines, &group.items, 0);
            lines.push(Line::default());
        }
    }

    fn experience(&self, lines: &mut Vec<Line<'static>>) {
        let dot = Style::new().fg(self.theme.foreground());
        let track = Style::new().fg(self.theme.border());

        for item in &self.profile.experience {
            lines.push(Line::from(vec![
                Span::styled("● ", dot),
                self.muted(&format!("{} · {}", item.when, item.at)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("│ ", track),
                self.text(&item.what).bold(),
            ]));
            for row in wrap_text(&item.details, self.width().saturating_sub(2)) {
                lines.push(Line::from(vec![Span::styled("│ ", track), self.muted(&row)]));
            }
            lines.push(Line::from(Span::styled("│", track)));
        }
    }

    fn projects(&self, lines: &mut Vec<Line<'static>>) {
        for project in &self.profile.projects {
            lines.push(Line::from(vec![
                Span::styled("▣ ", Style::new().fg(self.theme.accent())),
                self.text(&project.title).bold(),
                self.muted(" ↗"),
            ]));
            self.paragraph(lines, &project.description, 2);
            self.chips(lines, &project.tags, 2);
            lines.push(Line::from(vec![Span::raw("  "), self.muted(&project.link)]));
            lines.push(Line::default());
        }
    }

    fn contact(&self, lines: &mut Vec<Line<'static>>) {
        let p = self.profile;
        lines.push(Line::from(self.text(&p.contact_heading).bold()));
        self.paragraph(lines, &p.contact_pitch, 0);
        lines.push(Line::default());

        let links = [
            ("GitHub", p.links.github.as_str()),
            ("LinkedIn", p.links.linkedin.as_str()),
            ("E-mail", p.email_address()),
        ];
        for (label, target) in links {
            lines.push(Line::from(vec![
                Span::styled("→ ", Style::new().fg(self.theme.accent())),
                self.text(&format!("{label:<10}")).bold(),
                self.muted(target),
            ]));
        }
    }

    fn footer(&self, lines: &mut Vec<Line<'static>>) {
        let text = format!(
            "© {} {}. Feito com foco em performance e acessibilidade.",
            self.year, self.profile.name
        );
        lines.push(Line::from(self.muted(&text)).centered());
        lines.push(Line::default());
    }
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        rows.push(current);
    }
    rows
}
