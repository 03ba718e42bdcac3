//! One renderer per section. Each is a pure function of literal content
//! (plus the contact form status for [`contact`]).

use super::components::{
    badges, bullets, card, chart, heading, highlights, paragraph, score_bars, score_radar, stats,
    table, title, title_with_subtitle,
};
use super::tree::{Action, Block, FormView, RenderTree, Tone};
use crate::contact::{FormField, FormStatus, Subject};
use crate::content;
use crate::model::{ChartKind, ChartSpec, ColorScale, Palette, Section, Series};

pub fn home() -> RenderTree {
    let mut tree = RenderTree::new(Section::Home);
    tree.push(title_with_subtitle(content::NAME, content::TAGLINE))
        .push(highlights(content::HIGHLIGHTS))
        .push(Block::Divider)
        .push(heading("👋 Welcome to My Portfolio"))
        .push(paragraph(content::WELCOME))
        .push(bullets(content::WELCOME_POINTS))
        .push(paragraph(content::WELCOME_CLOSING))
        .push(
            card(Tone::Highlight, "📞 Quick Contact")
                .field("📱 Phone", content::CONTACT.phone)
                .field("📧 Email", content::CONTACT.email)
                .field("📍 Location", content::CONTACT.short_location)
                .build(),
        );
    tree
}

pub fn about() -> RenderTree {
    let mut tree = RenderTree::new(Section::About);
    tree.push(title("About Me"))
        .push(heading("🎯 Professional Summary"))
        .push(paragraph(content::SUMMARY))
        .push(heading("🌟 What Drives Me"))
        .push(bullets(content::DRIVERS))
        .push(heading("🎯 Career Objective"))
        .push(paragraph(content::OBJECTIVE))
        .push(heading("📚 Educational Journey"));
    tree.extend(content::EDUCATION.iter().map(|edu| {
        card(Tone::Info, format!("🎓 {}", edu.period))
            .subtitle(edu.degree)
            .field("Institution", edu.institution)
            .field("Grade", edu.grade)
            .build()
    }));
    tree.push(heading("🎲 Personal Interests"))
        .push(bullets(content::INTERESTS));
    tree
}

pub fn skills() -> RenderTree {
    let mut tree = RenderTree::new(Section::Skills);
    tree.push(title("Technical Skills"))
        .push(heading("💻 Programming Languages"))
        .push(badges(content::LANGUAGES))
        .push(chart(score_bars(
            "Technical Skills Proficiency",
            "Proficiency",
            content::PROFICIENCY,
            ColorScale::Blues,
        )))
        .push(heading("🛠️ Technologies & Tools"))
        .push(badges(content::TECH_TOOLS))
        .push(heading("🧠 Core Competencies"))
        .push(badges(content::CORE_SKILLS))
        .push(heading("📊 Skills Overview"))
        .push(chart(score_radar(
            "Skills Radar Chart",
            "Skill Level",
            content::RADAR,
        )));
    tree
}

pub fn experience() -> RenderTree {
    let job = content::INTERNSHIP;
    let mut tree = RenderTree::new(Section::Experience);
    tree.push(title("Professional Experience"))
        .push(
            card(Tone::Info, job.role)
                .subtitle(job.company)
                .field("📅 Duration", job.duration)
                .field("📍 Location", job.location)
                .build(),
        )
        .push(heading("🎯 Key Responsibilities & Achievements"));
    tree.extend(content::EXPERIENCE.iter().map(|item| {
        card(Tone::Plain, format!("📋 {}", item.task))
            .child(paragraph(item.description))
            .child(badges(item.skills))
            .build()
    }));

    let timeline = content::TIMELINE;
    tree.push(heading("📅 Career Timeline")).push(chart(
        ChartSpec::new(ChartKind::Line, "Career Timeline", timeline.iter().map(|e| e.label))
            .with_series(Series::new("Year", timeline.iter().map(|e| e.year)))
            .with_category_label("Event")
            .with_value_label("Year"),
    ));
    tree
}

pub fn projects() -> RenderTree {
    let mut tree = RenderTree::new(Section::Projects);
    tree.push(title("Featured Projects"));
    for (i, project) in content::PROJECTS.iter().enumerate() {
        if i > 0 {
            tree.push(Block::Divider);
        }
        let mut builder = card(Tone::Accent, project.title)
            .field("Technology", project.technology.join(", "))
            .child(heading("Project Overview"))
            .child(paragraph(project.overview))
            .child(heading(project.highlights_label))
            .child(bullets(project.highlights));
        if !project.tools.is_empty() {
            builder = builder
                .child(heading("Technologies Used"))
                .child(badges(project.tools));
        }
        if !project.impact.is_empty() {
            builder = builder.child(heading("Impact Metrics")).child(chart(score_bars(
                "Project Impact Metrics",
                "Impact",
                project.impact,
                ColorScale::Greens,
            )));
        }
        tree.push(builder.build());
    }
    tree.push(heading("🛠️ Technical Projects from Internship"))
        .push(table(
            ["Project", "Dataset", "Description", "Outcome"],
            content::INTERNSHIP_PROJECTS.iter().map(|p| {
                [
                    p.title.to_string(),
                    p.dataset.to_string(),
                    p.description.to_string(),
                    p.outcome.to_string(),
                ]
            }),
        ));
    tree
}

pub fn achievements() -> RenderTree {
    let mut tree = RenderTree::new(Section::Achievements);
    tree.push(title("Achievements & Recognition"));
    tree.extend(content::ACHIEVEMENTS.iter().map(|a| {
        card(Tone::Warning, a.title)
            .field("📅 Date", a.date)
            .field("📋 Category", a.category.to_string())
            .child(paragraph(a.description))
            .build()
    }));

    let distribution = content::category_distribution();
    tree.push(chart(
        ChartSpec::new(
            ChartKind::Pie,
            "Achievement Categories Distribution",
            distribution.iter().map(|(category, _)| category.to_string()),
        )
        .with_series(Series::new(
            "Count",
            distribution.iter().map(|(_, count)| *count as f64),
        ))
        .with_palette(Palette::Discrete(
            content::CATEGORY_COLORS.iter().map(|c| c.to_string()).collect(),
        )),
    ));
    tree
}

pub fn certifications() -> RenderTree {
    let mut tree = RenderTree::new(Section::Certifications);
    tree.push(title("Professional Certifications"));
    tree.extend(content::CERTIFICATIONS.iter().map(|cert| {
        card(Tone::Plain, format!("📜 {}", cert.title))
            .field("Issuer", cert.issuer)
            .field("Description", cert.description)
            .child(badges(cert.skills))
            .child(Block::Notice {
                tone: Tone::Success,
                text: "✅ Completed".to_string(),
            })
            .build()
    }));

    let journey = content::CERTIFICATION_JOURNEY;
    tree.push(heading("📅 Certification Timeline")).push(chart(
        ChartSpec::new(
            ChartKind::Scatter,
            "Certification Journey",
            journey.iter().map(|m| m.label),
        )
        .with_series(
            Series::new("Year", journey.iter().map(|m| m.year))
                .with_sizes(journey.iter().map(|m| m.importance)),
        )
        .with_category_label("Certification")
        .with_value_label("Year")
        .with_palette(Palette::Scale(ColorScale::Viridis)),
    ));
    tree
}

pub fn contact(status: &FormStatus) -> RenderTree {
    let mut tree = RenderTree::new(Section::Contact);
    tree.push(title("Get In Touch"))
        .push(heading("📬 Let's Connect!"))
        .push(paragraph(content::CONNECT))
        .push(heading("🎯 What I'm Looking For:"))
        .push(bullets(content::LOOKING_FOR))
        .push(heading("📝 Send me a message:"))
        .push(Block::Form {
            form: FormView {
                fields: FormField::ALL.iter().map(|f| f.label().to_string()).collect(),
                subjects: Subject::ALL.iter().map(|s| s.label().to_string()).collect(),
                submit_label: "Send Message".to_string(),
            },
        });
    match status {
        FormStatus::Idle => {}
        FormStatus::Acknowledged(message) => {
            tree.push(Block::Notice {
                tone: Tone::Success,
                text: message.clone(),
            });
        }
        FormStatus::Rejected(message) => {
            tree.push(Block::Notice {
                tone: Tone::Danger,
                text: message.clone(),
            });
        }
    }

    let info = content::CONTACT;
    tree.push(
        card(Tone::Highlight, "📞 Contact Information")
            .field("📱 Phone", info.phone)
            .field("📧 Email", info.email)
            .field("📍 Location", info.location)
            .field("🔗 LinkedIn", "Connect with me")
            .field("💻 GitHub", "View my code")
            .build(),
    )
    .push(heading("🌍 Find Me Online"))
    .push(Block::Actions {
        actions: content::LINKS
            .iter()
            .map(|link| Action {
                key: link.key,
                label: link.label.to_string(),
            })
            .collect(),
    })
    .push(heading("📊 Quick Stats"))
    .push(stats(content::QUICK_STATS));
    tree
}
