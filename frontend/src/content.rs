//! Static page copy. Everything rendered by the sections comes from here.

pub struct Stat {
    pub icon: &'static str,
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: "👥", target: 50, suffix: "+", label: "Mamnun Mijozlar" },
    Stat { icon: "🏆", target: 100, suffix: "+", label: "Tugallangan Loyihalar" },
    Stat { icon: "⏱️", target: 5, suffix: "+", label: "Yillik Tajriba" },
    Stat { icon: "🌍", target: 15, suffix: "+", label: "Xizmat Ko'rsatilgan Mamlakatlar" },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dilshodjon Abdullayev",
        role: "Bosh Dasturchi",
        expertise: "Full-Stack Dasturlash",
        image: "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    TeamMember {
        name: "Aziza Karimova",
        role: "Mobil Ilova Mutaxassisi",
        expertise: "iOS va Android Dasturlash",
        image: "https://images.pexels.com/photos/3727464/pexels-photo-3727464.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    TeamMember {
        name: "Bobur Rahimov",
        role: "Bot Dasturchisi",
        expertise: "Telegram Bot Yaratish",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    TeamMember {
        name: "Madina Toshmatova",
        role: "UI/UX Dizayner",
        expertise: "Dizayn va Foydalanuvchi Tajribasi",
        image: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

pub const HERO_PHRASES: &[&str] =
    &["Professional Veb-saytlar", "Mobil Ilovalar", "Telegram Botlar", "Raqamli Yechimlar"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Pink,
    Yellow,
    Red,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Pink => "pink",
            Accent::Yellow => "yellow",
            Accent::Red => "red",
        }
    }
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub accent: Accent,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "💻",
        title: "Veb Dasturlash",
        description: "Zamonaviy texnologiyalar bilan qurilgan maxsus veb-saytlar va veb-ilovalar.",
        features: &["React & Next.js", "Moslashuvchan Dizayn", "SEO Optimallashtirish", "Samaradorlikka Yo'naltirilgan"],
        accent: Accent::Blue,
    },
    Service {
        icon: "📱",
        title: "Mobil Ilovalar",
        description: "iOS va Android uchun mahalliy va cross-platform mobil ilovalar.",
        features: &["Mahalliy Dasturlash", "Cross-Platform", "App Store Nashr", "Push Bildirishnomalar"],
        accent: Accent::Green,
    },
    Service {
        icon: "🤖",
        title: "Telegram Botlar",
        description: "Biznes avtomatlashtirish va mijozlar bilan muloqot uchun aqlli chatbotlar.",
        features: &["Maxsus Buyruqlar", "API Integratsiya", "To'lov Jarayoni", "24/7 Avtomatlashtirish"],
        accent: Accent::Purple,
    },
    Service {
        icon: "🎨",
        title: "UI/UX Dizayn",
        description: "Foydalanuvchi tajribasini yaxshilaydigan chiroyli va intuitiv interfeylar.",
        features: &["Foydalanuvchi Tadqiqoti", "Wireframing", "Prototiplash", "Dizayn Tizimlari"],
        accent: Accent::Pink,
    },
    Service {
        icon: "🖥️",
        title: "Backend Dasturlash",
        description: "Mustahkam server tomoni yechimlari va API dasturlash.",
        features: &["REST APIs", "Ma'lumotlar Bazasi Dizayni", "Cloud Deployment", "Mikroservislar"],
        accent: Accent::Yellow,
    },
    Service {
        icon: "🛡️",
        title: "Xavfsizlik va Texnik Xizmat",
        description: "Keng qamrovli xavfsizlik yechimlari va doimiy texnik xizmat ko'rsatish.",
        features: &["Xavfsizlik Auditi", "Muntazam Yangilanishlar", "Zaxira Yechimlari", "24/7 Monitoring"],
        accent: Accent::Red,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Bot,
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platforma",
        description: "Ilg'or xususiyatlarga ega zamonaviy onlayn do'kon",
        image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: ProjectCategory::Web,
        technologies: &["React", "Node.js", "MongoDB"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 2,
        title: "Fitnes Mobil Ilova",
        description: "Cross-platform fitnes kuzatuv ilovasi",
        image: "https://images.pexels.com/photos/196655/pexels-photo-196655.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: ProjectCategory::Mobile,
        technologies: &["React Native", "Firebase", "Redux"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 3,
        title: "Mijozlarni Qo'llab-quvvatlash Boti",
        description: "Mijozlarga xizmat ko'rsatish uchun AI-ga asoslangan Telegram bot",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: ProjectCategory::Bot,
        technologies: &["Python", "Telegram API", "OpenAI"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 4,
        title: "Korporativ Veb-sayt",
        description: "CMS bilan professional biznes veb-sayti",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: ProjectCategory::Web,
        technologies: &["Next.js", "Tailwind", "Strapi"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 5,
        title: "Ovqat Yetkazib Berish Ilovasi",
        description: "Ovqat buyurtma qilish uchun mahalliy mobil ilova",
        image: "https://images.pexels.com/photos/4393021/pexels-photo-4393021.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: ProjectCategory::Mobile,
        technologies: &["Flutter", "Firebase", "Stripe"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 6,
        title: "Yangiliklar Yig'uvchi Bot",
        description: "Avtomatlashtirilgan yangiliklar yig'ish va tarqatish boti",
        image: "https://images.pexels.com/photos/518543/pexels-photo-518543.jpeg?auto=compress&cs=tinysrgb&w=600",
        category: ProjectCategory::Bot,
        technologies: &["Node.js", "Telegram API", "RSS"],
        live_url: "#",
        github_url: "#",
    },
];

pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "2024-yilda Veb Dasturlashning 10 ta Muhim Trendi",
        excerpt: "AI integratsiyasidan progressiv veb-ilovalargacha, veb dasturlash kelajagini shakllantirayotgan eng so'nggi trendlarni kashf eting.",
        image: "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=600",
        author: "Dilshodjon Abdullayev",
        date: "2024-01-15",
        read_time: "5 daqiqa",
        category: "Veb Dasturlash",
    },
    BlogPost {
        id: 2,
        title: "Mobil Ilova Xavfsizligi: 2024 uchun Eng Yaxshi Amaliyotlar",
        excerpt: "Ushbu muhim xavfsizlik amaliyotlari bilan mobil ilovalaringizni xavfsizlik tahdidlaridan qanday himoya qilishni o'rganing.",
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=600",
        author: "Aziza Karimova",
        date: "2024-01-10",
        read_time: "7 daqiqa",
        category: "Mobil Dasturlash",
    },
    BlogPost {
        id: 3,
        title: "AI bilan Aqlli Telegram Botlar Yaratish",
        excerpt: "Zamonaviy AI texnologiyalari va Telegram Bot API yordamida aqlli chatbotlarni qanday yaratishni o'rganing.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=600",
        author: "Bobur Rahimov",
        date: "2024-01-05",
        read_time: "6 daqiqa",
        category: "Bot Dasturlash",
    },
    BlogPost {
        id: 4,
        title: "Yaxshi Foydalanuvchi Tajribasi uchun UI/UX Dizayn Tamoyillari",
        excerpt: "Jozibali va intuitiv foydalanuvchi interfeyslari yaratadigan asosiy dizayn tamoyillarini o'zlashtirib oling.",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
        author: "Madina Toshmatova",
        date: "2024-01-01",
        read_time: "8 daqiqa",
        category: "Dizayn",
    },
];

pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

/// First images on screen once the sections load.
pub const CRITICAL_IMAGES: [&str; 2] = [PROJECTS[0].image, POSTS[0].image];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "✉️",
        title: "Email Yuboring",
        details: "dev.dilshodjon@gmail.com",
        description: "Istalgan vaqtda email yuboring!",
    },
    ContactInfo {
        icon: "📞",
        title: "Qo'ng'iroq Qiling",
        details: "+998 99 534 03 13",
        description: "Dush-Jum 9:00 dan 18:00 gacha",
    },
    ContactInfo {
        icon: "📍",
        title: "Bizni Ziyorat Qiling",
        details: "Toshkent, O'zbekiston",
        description: "Ofisimizga tashrif buyuring",
    },
];

pub const CONTACT_SUBJECTS: &[&str] = &[
    "Veb Dasturlash",
    "Mobil Ilova Dasturlash",
    "Telegram Bot Dasturlash",
    "UI/UX Dizayn",
    "Maslahat",
    "Boshqa",
];

pub const BENEFITS: &[&str] = &[
    "5+ yillik tajribaga ega mutaxassis jamoa",
    "Zamonaviy texnologiyalar va eng yaxshi amaliyotlar",
    "Raqobatbardosh narxlar va tez yetkazib berish",
    "24/7 qo'llab-quvvatlash va texnik xizmat",
    "Biznes ehtiyojlaringiz uchun maxsus yechimlar",
];

pub const PHONE: &str = "+998 99 534 03 13";
pub const PHONE_HREF: &str = "tel:+998995340313";
pub const EMAIL: &str = "dev.dilshodjon@gmail.com";
pub const ADDRESS: &str = "Toshkent, O'zbekiston";

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

/// Header navigation, in document order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "hero", label: "Bosh sahifa" },
    NavLink { id: "about", label: "Biz haqimizda" },
    NavLink { id: "services", label: "Xizmatlar" },
    NavLink { id: "portfolio", label: "Portfolio" },
    NavLink { id: "blog", label: "Blog" },
    NavLink { id: "contact", label: "Bog'lanish" },
];

pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { id: "about", label: "Biz Haqimizda" },
    NavLink { id: "services", label: "Xizmatlar" },
    NavLink { id: "portfolio", label: "Portfolio" },
    NavLink { id: "blog", label: "Blog" },
    NavLink { id: "contact", label: "Aloqa" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#", glyph: "f" },
    SocialLink { label: "Twitter", href: "#", glyph: "𝕏" },
    SocialLink { label: "Instagram", href: "#", glyph: "◎" },
    SocialLink { label: "LinkedIn", href: "#", glyph: "in" },
    SocialLink { label: "GitHub", href: "#", glyph: "⌥" },
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Veb Dasturlash",
    "Mobil Ilovalar",
    "Telegram Botlar",
    "UI/UX Dizayn",
    "Backend Dasturlash",
    "Maslahat",
];

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Veb-sayt yaratish qancha vaqt oladi?",
        answer: "Oddiy veb-sayt 2-4 hafta, murakkab veb-ilovalar esa 2-3 oy ichida tayyor bo'ladi.",
    },
    FaqEntry {
        question: "Mobil ilovalarni qaysi platformalar uchun yaratasiz?",
        answer: "iOS va Android uchun mahalliy hamda cross-platform ilovalar yaratamiz.",
    },
    FaqEntry {
        question: "Telegram bot yaratish narxi qancha?",
        answer: "Narx botning funksionalligiga bog'liq. Bepul maslahat uchun biz bilan bog'laning.",
    },
];
