use crate::model::{
    AchievementCategory, AchievementItem, CertificationItem, CertificationMilestone,
    ContactDetails, EducationItem, Engagement, ExperienceItem, Highlight, LinkPlaceholder,
    ProjectItem, ProjectSummary, SkillEntry, TimelineEvent,
};

pub const NAME: &str = "Arka Sain";
pub const TAGLINE: &str =
    "Data Analyst | Business Analytics Enthusiast | Machine Learning Practitioner";

pub const CONTACT: ContactDetails = ContactDetails {
    phone: "+91 7410173864",
    email: "sainarka2@gmail.com",
    location: "Kolkata, West Bengal, India",
    short_location: "Kolkata, West Bengal",
};

pub const FOOTER: [&str; 2] = [
    "🚀 Built with Rust | 📊 Powered by Data | ❤️ Made by Arka Sain",
    "© 2025 Arka Sain. All rights reserved.",
];

// Home

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "📊",
        label: "Data Analysis",
        value: "Expert Level",
    },
    Highlight {
        icon: "🎓",
        label: "Education",
        value: "PGP + MBA",
    },
    Highlight {
        icon: "🏆",
        label: "Projects",
        value: "5+ Completed",
    },
    Highlight {
        icon: "📜",
        label: "Certifications",
        value: "5+ Earned",
    },
];

pub const WELCOME: &str = "I'm a passionate **Data Analyst** and **Business Analytics** student with hands-on experience in:";

pub const WELCOME_POINTS: &[&str] = &[
    "**Data Analysis & Visualization** using Power BI, Tableau, and Python",
    "**Machine Learning** implementations with real-world datasets",
    "**Business Intelligence** dashboard development",
    "**Statistical Analysis** and predictive modeling",
];

pub const WELCOME_CLOSING: &str = "Currently pursuing **PGP + MBA in Business Analytics & Data Science** at Bengal Institute of Business Studies, I combine technical expertise with business acumen to derive actionable insights from data.";

// About

pub const SUMMARY: &str = "I'm a dedicated **Data Analyst** with a strong foundation in **Business Analytics** and **Data Science**. My journey in data analytics began during my BCA studies and has evolved through practical internships and diverse project experiences.";

pub const DRIVERS: &[&str] = &[
    "**Problem-Solving**: I love transforming complex data into actionable business insights",
    "**Continuous Learning**: Always exploring new tools and techniques in data science",
    "**Business Impact**: Focused on creating solutions that drive real business value",
    "**Collaboration**: Enjoy working in teams to achieve common goals",
];

pub const OBJECTIVE: &str = "To leverage my analytical skills and business acumen in a challenging data analyst role where I can contribute to data-driven decision making and help organizations unlock the power of their data.";

pub const EDUCATION: &[EducationItem] = &[
    EducationItem {
        period: "Current (2024-Present)",
        degree: "PGP + MBA - Business Analytics & Data Science",
        institution: "Bengal Institute of Business Studies",
        grade: "77%",
    },
    EducationItem {
        period: "2021-2024",
        degree: "BCA (Hons)",
        institution: "Burdwan Institute of Management and Computer Science",
        grade: "71%",
    },
    EducationItem {
        period: "2021",
        degree: "WBCHSE - Science",
        institution: "Raina Swami Bholananda Vidyayatan School",
        grade: "71%",
    },
];

pub const INTERESTS: &[&str] = &[
    "🏆 Sports (College Champion)",
    "📊 Data Visualization",
    "🤖 Machine Learning Research",
    "📱 Technology Trends",
];

// Skills

pub const LANGUAGES: &[&str] = &["Python", "SQL", "HTML", "C"];

pub const PROFICIENCY: &[SkillEntry] = &[
    SkillEntry::new("Python", 90),
    SkillEntry::new("SQL", 85),
    SkillEntry::new("Power BI", 95),
    SkillEntry::new("Excel", 90),
    SkillEntry::new("Tableau", 80),
    SkillEntry::new("Pandas", 88),
    SkillEntry::new("Machine Learning", 75),
];

pub const TECH_TOOLS: &[&str] = &[
    "Power BI",
    "Tableau",
    "Advanced Excel",
    "MySQL",
    "Pandas",
    "NumPy",
    "Seaborn",
    "Matplotlib",
    "Scikit-Learn",
    "Jupyter",
    "PyCharm",
];

pub const CORE_SKILLS: &[&str] = &[
    "Data Analysis",
    "Data Visualization",
    "Critical Thinking",
    "Communication",
    "Leadership",
    "Statistical Analysis",
    "Business Intelligence",
];

pub const RADAR: &[SkillEntry] = &[
    SkillEntry::new("Programming", 85),
    SkillEntry::new("Data Analysis", 90),
    SkillEntry::new("Visualization", 95),
    SkillEntry::new("Machine Learning", 75),
    SkillEntry::new("Business Intelligence", 88),
    SkillEntry::new("Communication", 82),
];

// Experience

pub const INTERNSHIP: Engagement = Engagement {
    role: "🔍 Data Analyst Intern",
    company: "PRODIGY INFOTECH - Tech Services",
    duration: "April 2025 – May 2025",
    location: "Kolkata, West Bengal, India",
};

pub const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        task: "Data Visualization",
        description: "Created visualizations (bar charts, histograms) to analyze and represent distributions of categorical and continuous variables in population datasets",
        skills: &["Power BI", "Python", "Data Visualization"],
    },
    ExperienceItem {
        task: "Exploratory Data Analysis",
        description: "Performed end-to-end data cleaning and EDA using real-world datasets such as the Titanic dataset to uncover trends, patterns, and relationships",
        skills: &["Pandas", "Python", "Data Cleaning"],
    },
    ExperienceItem {
        task: "Machine Learning",
        description: "Built and trained a decision tree classifier using the Bank Marketing dataset from UCI to predict customer behavior",
        skills: &["Scikit-Learn", "Machine Learning", "Classification"],
    },
    ExperienceItem {
        task: "Sentiment Analysis",
        description: "Conducted sentiment analysis on social media datasets to identify and visualize public opinion trends and attitudes toward various brands",
        skills: &["NLP", "Python", "Social Media Analytics"],
    },
    ExperienceItem {
        task: "Traffic Analysis",
        description: "Analyzed traffic accident datasets to discover key patterns associated with road conditions, weather, and time of day",
        skills: &["Statistical Analysis", "Pattern Recognition", "Data Mining"],
    },
];

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: 2021,
        label: "Started BCA",
    },
    TimelineEvent {
        year: 2021,
        label: "WBCHSE Graduation",
    },
    TimelineEvent {
        year: 2024,
        label: "BCA Graduation",
    },
    TimelineEvent {
        year: 2024,
        label: "Started PGP+MBA",
    },
    TimelineEvent {
        year: 2025,
        label: "Data Analyst Internship",
    },
    TimelineEvent {
        year: 2025,
        label: "Present",
    },
];

// Projects

pub const PROJECTS: &[ProjectItem] = &[
    ProjectItem {
        title: "📊 Sales & Business Insights Dashboard",
        technology: &["Power BI"],
        overview: "Designed and developed a comprehensive Sales & Business Insights Dashboard in Power BI to visualize key performance indicators (KPIs), sales trends, and regional insights for improved business decision-making.",
        highlights_label: "Key Features",
        highlights: &[
            "Dynamic reports with interactive visuals",
            "DAX measures for complex calculations",
            "Slicers and filters for user interaction",
            "Regional performance analysis",
            "Sales trend identification",
        ],
        tools: &["Power BI", "DAX", "Data Cleaning", "EDA", "KPI Development"],
        impact: &[],
    },
    ProjectItem {
        title: "🛒 Blink IT Sales Power BI Dashboard",
        technology: &["Power BI", "Advanced Analytics"],
        overview: "Comprehensive analysis of 12+ months of sales data to uncover key business insights and performance drivers.",
        highlights_label: "Key Achievements",
        highlights: &[
            "Analyzed over 12 months of sales data",
            "Identified top-performing products and underperforming regions",
            "Discovered that 60% of total revenue came from 3 key products",
            "Created dynamic visuals and KPIs for monitoring targets",
            "Enabled data-driven sales strategies and quarterly reviews",
        ],
        tools: &[],
        impact: &[
            SkillEntry::new("Revenue Analysis", 95),
            SkillEntry::new("Product Performance", 90),
            SkillEntry::new("Regional Insights", 85),
            SkillEntry::new("Decision Support", 92),
        ],
    },
];

pub const INTERNSHIP_PROJECTS: &[ProjectSummary] = &[
    ProjectSummary {
        title: "🧠 Decision Tree Classifier",
        dataset: "Bank Marketing Dataset (UCI)",
        description: "Built and trained a decision tree classifier using UCI Bank Marketing dataset",
        outcome: "Customer behavior prediction model",
    },
    ProjectSummary {
        title: "😊 Sentiment Analysis Engine",
        dataset: "Social Media Datasets",
        description: "Social media sentiment analysis for brand perception tracking",
        outcome: "Public opinion trend visualization",
    },
    ProjectSummary {
        title: "🚗 Traffic Accident Analysis",
        dataset: "Traffic Accident Datasets",
        description: "Pattern analysis of traffic accidents with weather and time correlations",
        outcome: "Accident hotspot identification",
    },
];

// Achievements

pub const ACHIEVEMENTS: &[AchievementItem] = &[
    AchievementItem {
        title: "🏆 College Sport Champion - BIBS",
        date: "March 2025",
        description: "Recognized for outstanding performance in college sports competitions",
        category: AchievementCategory::Sports,
    },
    AchievementItem {
        title: "🥇 Top 5 Finalist in IBM Technovate - BIBS",
        date: "April 2025",
        description: "Selected among top 5 finalists in IBM's technology innovation competition",
        category: AchievementCategory::Technology,
    },
    AchievementItem {
        title: "🎉 Team Day and Theme Day - BIBS",
        date: "April 2024",
        description: "Active participation and recognition in college team building activities",
        category: AchievementCategory::Leadership,
    },
];

pub const CATEGORY_COLORS: [&str; 3] = ["#FF6B6B", "#4ECDC4", "#45B7D1"];

// Certifications

pub const CERTIFICATIONS: &[CertificationItem] = &[
    CertificationItem {
        title: "🤖 Machine Learning with Python",
        issuer: "IIT Kanpur",
        description: "Foundational machine learning concepts using Python",
        skills: &["Python", "Machine Learning", "Algorithms"],
    },
    CertificationItem {
        title: "💼 Data Science Job Simulation",
        issuer: "Forage",
        description: "Practical data science project simulation",
        skills: &["Data Science", "Project Management", "Real-world Applications"],
    },
    CertificationItem {
        title: "🐍 Python 101 for Data Science",
        issuer: "IBM Developer Skills Network",
        description: "Data Science techniques and tools using Python",
        skills: &["Python", "Data Science", "Programming"],
    },
    CertificationItem {
        title: "🗄️ SQL & Relational Databases 101",
        issuer: "IBM",
        description: "SQL skills for database management and querying",
        skills: &["SQL", "Database Management", "Data Querying"],
    },
    CertificationItem {
        title: "📊 Advanced Excel with Power BI",
        issuer: "BIBS",
        description: "Advanced Excel & Power BI for Data Analysis, Visualization, and Reporting",
        skills: &["Excel", "Power BI", "Data Analysis", "Reporting"],
    },
];

pub const CERTIFICATION_JOURNEY: &[CertificationMilestone] = &[
    CertificationMilestone {
        label: "Python 101",
        year: 2024,
        importance: 8,
    },
    CertificationMilestone {
        label: "SQL & Databases",
        year: 2024,
        importance: 9,
    },
    CertificationMilestone {
        label: "Advanced Excel",
        year: 2024,
        importance: 8,
    },
    CertificationMilestone {
        label: "ML with Python",
        year: 2025,
        importance: 10,
    },
    CertificationMilestone {
        label: "Data Science Simulation",
        year: 2025,
        importance: 9,
    },
];

// Contact

pub const CONNECT: &str = "I'm always interested in new opportunities, collaborations, and interesting projects. Whether you're looking for a data analyst, have a project in mind, or just want to chat about data science, feel free to reach out!";

pub const LOOKING_FOR: &[&str] = &[
    "**Full-time Data Analyst positions**",
    "**Freelance data analysis projects**",
    "**Collaboration opportunities**",
    "**Mentorship in advanced analytics**",
];

pub const QUICK_STATS: &[(&str, u32)] = &[
    ("Projects Completed", 5),
    ("Certifications", 5),
    ("Years of Study", 3),
    ("Programming Languages", 4),
];

pub const LINKS: &[LinkPlaceholder] = &[
    LinkPlaceholder {
        key: 'l',
        label: "🔗 LinkedIn Profile",
        notice: "LinkedIn profile link would open here",
    },
    LinkPlaceholder {
        key: 'h',
        label: "💻 GitHub Repository",
        notice: "GitHub profile link would open here",
    },
    LinkPlaceholder {
        key: 'm',
        label: "📧 Send Email",
        notice: "Email client would open here",
    },
];
