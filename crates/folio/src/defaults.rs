// File: folio/src/defaults.rs
// Purpose: Compiled-in content used when neither the backend nor a snapshot has any

use crate::model::{
    Education, Experience, PersonalInfo, Project, ProjectCategory, ResearchProject, Skill,
    SkillCategory, SkillLevel,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Your Name".to_string(),
        title: "Computer Science Student & Researcher".to_string(),
        email: "your.email@university.edu".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "University City, State".to_string(),
        linkedin: "https://linkedin.com/in/yourprofile".to_string(),
        github: "https://github.com/yourusername".to_string(),
        website: "https://yourportfolio.com".to_string(),
        bio: "Passionate computer science student with a strong interest in artificial \
              intelligence, machine learning, and software development. Currently pursuing \
              my degree while actively engaging in research projects and building \
              innovative applications."
            .to_string(),
        profile_image_url: Some("/image.jpg".to_string()),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "E-Commerce Platform".to_string(),
            description: "A full-stack e-commerce platform built with React, Node.js, and \
                          MongoDB. Features include user authentication, product catalog, \
                          shopping cart, and payment integration."
                .to_string(),
            technologies: strings(&["React", "Node.js", "MongoDB", "Express", "Stripe API"]),
            category: ProjectCategory::Web,
            image_url: None,
            github_url: Some("https://github.com/yourusername/ecommerce-platform".to_string()),
            live_url: Some("https://your-ecommerce-demo.com".to_string()),
        },
        Project {
            id: "2".to_string(),
            title: "Task Management Mobile App".to_string(),
            description: "A cross-platform mobile application for task management with \
                          real-time synchronization and collaborative features."
                .to_string(),
            technologies: strings(&["React Native", "Firebase", "Redux", "TypeScript"]),
            category: ProjectCategory::Mobile,
            image_url: None,
            github_url: Some("https://github.com/yourusername/task-manager-app".to_string()),
            live_url: None,
        },
        Project {
            id: "3".to_string(),
            title: "Data Visualization Dashboard".to_string(),
            description: "Interactive dashboard for visualizing complex datasets with various \
                          chart types and filtering capabilities."
                .to_string(),
            technologies: strings(&["Python", "Dash", "Plotly", "Pandas", "PostgreSQL"]),
            category: ProjectCategory::Web,
            image_url: None,
            github_url: Some("https://github.com/yourusername/data-viz-dashboard".to_string()),
            live_url: None,
        },
    ]
}

pub fn research_projects() -> Vec<ResearchProject> {
    vec![
        ResearchProject {
            id: "1".to_string(),
            title: "Machine Learning Approaches for Sentiment Analysis in Social Media"
                .to_string(),
            description: "Investigating various ML algorithms for analyzing sentiment in social \
                          media posts with focus on handling sarcasm and context."
                .to_string(),
            r#abstract: "This research explores the effectiveness of different machine learning \
                         approaches in sentiment analysis of social media content. We compare \
                         traditional methods with modern deep learning techniques and propose a \
                         novel approach for handling contextual sentiment analysis."
                .to_string(),
            authors: strings(&["Your Name", "Dr. Advisor Name", "Collaborator Name"]),
            tags: strings(&["Machine Learning", "NLP", "Sentiment Analysis", "Social Media"]),
            published_date: Some("2023-09-15".to_string()),
            journal: None,
            conference: Some("International Conference on Computational Linguistics".to_string()),
            paper_url: Some("/paper.pdf".to_string()),
        },
        ResearchProject {
            id: "2".to_string(),
            title: "Optimization of Neural Network Architectures for Edge Computing".to_string(),
            description: "Research on developing lightweight neural network architectures \
                          suitable for deployment on edge devices with limited computational \
                          resources."
                .to_string(),
            r#abstract: "This study focuses on creating efficient neural network architectures \
                         that maintain high accuracy while being suitable for edge computing \
                         environments. We explore various compression techniques and novel \
                         architectural designs."
                .to_string(),
            authors: strings(&["Your Name", "Research Team"]),
            tags: strings(&[
                "Neural Networks",
                "Edge Computing",
                "Optimization",
                "Mobile Computing",
            ]),
            published_date: None,
            journal: None,
            conference: None,
            paper_url: Some("/paper.pdf".to_string()),
        },
    ]
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            title: "Software Development Intern".to_string(),
            company: "Tech Company Inc.".to_string(),
            location: "City, State".to_string(),
            start_date: "2023-06".to_string(),
            end_date: Some("2023-08".to_string()),
            description: strings(&[
                "Developed and maintained web applications using React and Node.js",
                "Collaborated with senior developers on feature implementation",
                "Participated in code reviews and agile development processes",
                "Improved application performance by 25% through optimization",
            ]),
            technologies: Some(strings(&["React", "Node.js", "PostgreSQL", "Git"])),
        },
        Experience {
            id: "2".to_string(),
            title: "Research Assistant".to_string(),
            company: "University Research Lab".to_string(),
            location: "University City, State".to_string(),
            start_date: "2023-01".to_string(),
            end_date: None,
            description: strings(&[
                "Assisted in machine learning research projects",
                "Implemented and tested various ML algorithms",
                "Analyzed large datasets and prepared research reports",
                "Presented findings at departmental seminars",
            ]),
            technologies: Some(strings(&["Python", "TensorFlow", "PyTorch", "Jupyter"])),
        },
    ]
}

pub fn education() -> Vec<Education> {
    vec![Education {
        id: "1".to_string(),
        degree: "Bachelor of Science in Computer Science".to_string(),
        institution: "Your University".to_string(),
        location: "University City, State".to_string(),
        start_date: "2021-09".to_string(),
        end_date: Some("2025-05".to_string()),
        gpa: Some("3.8/4.0".to_string()),
        relevant_courses: Some(strings(&[
            "Data Structures and Algorithms",
            "Machine Learning",
            "Database Systems",
            "Software Engineering",
            "Computer Networks",
            "Artificial Intelligence",
        ])),
    }]
}

pub fn skills() -> Vec<Skill> {
    use SkillCategory::*;
    use SkillLevel::*;

    [
        ("JavaScript/TypeScript", Advanced, Programming),
        ("Python", Advanced, Programming),
        ("Java", Intermediate, Programming),
        ("C++", Intermediate, Programming),
        ("React", Advanced, Framework),
        ("Node.js", Intermediate, Framework),
        ("Express.js", Intermediate, Framework),
        ("TensorFlow", Intermediate, Framework),
        ("PyTorch", Beginner, Framework),
        ("MongoDB", Intermediate, Database),
        ("PostgreSQL", Intermediate, Database),
        ("Git", Advanced, Tool),
        ("Docker", Beginner, Tool),
        ("AWS", Beginner, Tool),
    ]
    .into_iter()
    .map(|(name, level, category)| Skill {
        name: name.to_string(),
        level,
        category,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_collections_are_populated() {
        assert_eq!(projects().len(), 3);
        assert_eq!(research_projects().len(), 2);
        assert_eq!(experience().len(), 2);
        assert_eq!(education().len(), 1);
        assert_eq!(skills().len(), 14);
    }

    #[test]
    fn test_default_skill_names_are_unique() {
        let names: HashSet<_> = skills().into_iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_current_position_has_no_end_date() {
        let current = experience().into_iter().find(|e| e.id == "2").unwrap();
        assert!(current.end_date.is_none());
    }
}
