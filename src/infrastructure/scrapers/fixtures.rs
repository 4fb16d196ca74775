//! Builders for front-page markup shaped like the live site.

pub enum StoryMeta {
    Full {
        score: u64,
        user: &'static str,
        comments: u64,
    },
    Discuss {
        score: u64,
        user: &'static str,
    },
    Job,
    Raw(String),
}

impl StoryMeta {
    pub fn full(score: u64, user: &'static str, comments: u64) -> Self {
        StoryMeta::Full {
            score,
            user,
            comments,
        }
    }

    pub fn discuss(score: u64, user: &'static str) -> Self {
        StoryMeta::Discuss { score, user }
    }

    pub fn job() -> Self {
        StoryMeta::Job
    }

    fn render(&self, rank: usize) -> String {
        let age = format!(r#"<span class="age"><a href="item?id={rank}">2 hours ago</a></span>"#);
        match self {
            StoryMeta::Full {
                score,
                user,
                comments,
            } => format!(
                r#"<span class="score">{score} points</span> by <a href="user?id={user}" class="hnuser">{user}</a> {age} | <a href="hide?id={rank}">hide</a> | <a href="item?id={rank}">{comments}&nbsp;comments</a>"#
            ),
            StoryMeta::Discuss { score, user } => format!(
                r#"<span class="score">{score} points</span> by <a href="user?id={user}" class="hnuser">{user}</a> {age} | <a href="item?id={rank}">discuss</a>"#
            ),
            StoryMeta::Job => age,
            StoryMeta::Raw(html) => html.clone(),
        }
    }
}

pub fn story(rank: usize, title: &str, meta: StoryMeta) -> String {
    format!(
        r#"<tr class="athing" id="{rank}"><td class="title"><span class="rank">{rank}.</span></td><td class="title"><span class="titleline"><a href="https://example.com/{rank}">{title}</a></span></td></tr>
<tr><td colspan="2"></td><td class="subtext">{}</td></tr>
<tr class="spacer"></tr>"#,
        meta.render(rank)
    )
}

pub fn front_page(stories: &[String]) -> String {
    format!(
        r#"<html><head><title>Hacker News</title></head><body><center><table id="hnmain"><tr><td><table class="itemlist">
{}
</table></td></tr></table></center></body></html>"#,
        stories.join("\n")
    )
}

/// A page of `count` complete stories ranked from `first_rank` upwards.
pub fn ranked_page(first_rank: usize, count: usize) -> String {
    let stories: Vec<String> = (first_rank..first_rank + count)
        .map(|rank| {
            let meta = StoryMeta::full(rank as u64, "pg", 1);
            story(rank, &format!("Story {rank}"), meta)
        })
        .collect();
    front_page(&stories)
}
