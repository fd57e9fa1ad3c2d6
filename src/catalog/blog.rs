use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub author: &'static str,
    /// ISO-8601 date.
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
}

pub fn posts() -> &'static [BlogPost] {
    &POSTS
}

pub fn find(id: u32) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.id == id)
}

static POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        title: "Understanding AI's Role in Modern Legal Practice",
        summary: "Explore how artificial intelligence is transforming the legal industry and \
                  improving access to justice.",
        author: "Sarah Johnson",
        date: "2024-02-15",
        read_time: "5 min read",
        category: "Legal Tech",
    },
    BlogPost {
        id: 2,
        title: "The Future of Smart Contracts",
        summary: "How blockchain and AI are making contracts more intelligent and \
                  self-executing.",
        author: "Michael Chen",
        date: "2024-02-10",
        read_time: "7 min read",
        category: "Blockchain",
    },
    BlogPost {
        id: 3,
        title: "Legal Rights in the Digital Age",
        summary: "A comprehensive guide to understanding your legal rights in today's digital \
                  world.",
        author: "Emily Rodriguez",
        date: "2024-02-05",
        read_time: "6 min read",
        category: "Digital Rights",
    },
];
