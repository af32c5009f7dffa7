use yew::{html, Callback, Html, Properties};

const HOVER_TILT: &str = "transform: translateY(-15px) rotateY(2deg) scale(1.02);";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub const COURSES: &[Course] = &[
    Course {
        title: "Artificial Intelligence & Machine Learning",
        summary: "Build and deploy models from first principles to production.",
        highlights: &[
            "Python, NumPy and PyTorch",
            "Supervised and unsupervised learning",
            "Capstone with an industry partner",
        ],
    },
    Course {
        title: "Data Science & Analytics",
        summary: "Turn raw data into decisions.",
        highlights: &[
            "SQL and data warehousing",
            "Statistics and experiment design",
            "Dashboards and storytelling",
        ],
    },
    Course {
        title: "Full Stack Web Development",
        summary: "Ship complete web applications end to end.",
        highlights: &[
            "HTML, CSS and modern JavaScript",
            "REST APIs and databases",
            "Deployment and monitoring",
        ],
    },
    Course {
        title: "Cloud & DevOps",
        summary: "Automate infrastructure and delivery pipelines.",
        highlights: &[
            "Linux and networking fundamentals",
            "Containers and orchestration",
            "CI/CD pipelines",
        ],
    },
];

fn details_style(expanded: bool) -> &'static str {
    if expanded {
        "display: block; animation: fadeIn 0.3s ease-out;"
    } else {
        "display: none;"
    }
}

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
}

#[yew::function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let expanded = yew::use_state(|| false);
    let hovered = yew::use_state(|| false);

    let onclick = Callback::from({
        let expanded = expanded.clone();
        move |_| expanded.set(!*expanded)
    });
    let onmouseenter = Callback::from({
        let hovered = hovered.clone();
        move |_| hovered.set(true)
    });
    let onmouseleave = Callback::from({
        let hovered = hovered.clone();
        move |_| hovered.set(false)
    });

    let course = props.course;
    html! {
        <div class="course-card"
            style={if *hovered { HOVER_TILT } else { "" }}
            {onclick} {onmouseenter} {onmouseleave}>
            <h3>{ course.title }</h3>
            <p>{ course.summary }</p>
            <ul style={details_style(*expanded)}>
                { for course.highlights.iter().map(|h| html! { <li>{ *h }</li> }) }
            </ul>
        </div>
    }
}

#[yew::function_component(CourseList)]
pub fn course_list() -> Html {
    html! {
        <div class="course-grid">
            { for COURSES.iter().map(|&course| html! { <CourseCard {course} /> }) }
        </div>
    }
}
