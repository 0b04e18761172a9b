//! Home page content.

use serde::Serialize;

use super::model::{ImageRef, NavLink};

/// One expanding card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub img_src: String,
    pub icon: String,
    pub link_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub specialties: Vec<String>,
    pub phone: Option<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    pub image_src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub acronym: String,
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupalTeaser {
    pub overline: String,
    pub heading: String,
    /// Markdown.
    pub text: String,
    pub points: Vec<String>,
    pub image: ImageRef,
    pub link: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub overline: String,
    pub title_lines: Vec<String>,
    pub tagline: String,
    pub hero_image: ImageRef,

    /// Markdown paragraphs of the founder's welcome note.
    pub welcome: String,
    pub welcome_signature: String,
    pub portrait: ImageRef,
    pub welcome_image: ImageRef,

    pub cards_overline: String,
    pub cards_heading: String,
    pub cards_hint: String,
    pub therapy_cards: Vec<CardItem>,

    pub certifications_title: String,
    pub certifications: Vec<Certification>,

    pub groupal: GroupalTeaser,

    pub team_title: String,
    pub team_subtitle: String,
    pub team: Vec<TeamMember>,

    pub testimonials_title: String,
    pub testimonials_subtitle: String,
    pub testimonials: Vec<Testimonial>,

    pub contact_heading: String,
    pub contact_text: String,
}

const HERO: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1920&q=80";
const MEDITATION: &str = "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=1200&q=80";
const NATURE: &str = "https://images.unsplash.com/photo-1518495973542-4542c06a5843?w=1200&q=80";
const PORTRAIT: &str = "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=800&q=80";

fn card(id: &str, title: &str, description: &str, img_src: &str, icon: &str, link_href: &str) -> CardItem {
    CardItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        img_src: img_src.to_string(),
        icon: icon.to_string(),
        link_href: link_href.to_string(),
    }
}

pub fn therapy_cards() -> Vec<CardItem> {
    vec![
        card(
            "gestalt",
            "Gestalt-Thérapie",
            "Découvrir ce que nous ressentons et ce dont nous avons besoin pour un développement harmonieux.",
            "https://images.unsplash.com/photo-1544027993-37dbfe43562a?w=800&q=80",
            "🧠",
            "/therapies/gestalt",
        ),
        card(
            "tcc",
            "TCC",
            "Thérapies Comportementales et Cognitives pour un changement durable.",
            "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?w=800&q=80",
            "✨",
            "/therapies/tcc",
        ),
        card(
            "nutrition",
            "Nutrition Comportementale",
            "Retrouver une relation apaisée avec l'alimentation.",
            "https://images.unsplash.com/photo-1490645935967-10de6ba17061?w=800&q=80",
            "🍽️",
            "/therapies/nutrition",
        ),
        card(
            "familiales",
            "Thérapies Familiales",
            "Approche systémique pour couples et familles.",
            "https://images.unsplash.com/photo-1511895426328-dc8714191300?w=800&q=80",
            "👪",
            "/therapies/familiales",
        ),
        card(
            "sexologie",
            "Sexologie",
            "Accompagnement individuel ou en couple.",
            "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?w=800&q=80",
            "❤️",
            "/therapies/sexologie",
        ),
        card(
            "meditation",
            "Méditation MBCT",
            "Pleine conscience pour prévention et équilibre.",
            "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&q=80",
            "🤲",
            "/groupal/mbct",
        ),
    ]
}

fn member(
    name: &str,
    title: &str,
    description: &str,
    image_url: &str,
    specialties: &[&str],
    profile_url: Option<&str>,
) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        phone: Some("0692460789".to_string()),
        profile_url: profile_url.map(str::to_string),
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(
            "Dr Joëlle Deblangey",
            "Médecin Psychothérapeute · Fondatrice",
            "Médecin psychothérapeute certifiée avec plus de 40 ans d'expérience. Formée en Gestalt-thérapie, TCC, thérapie systémique familiale et sexologie. Instructrice MBCT certifiée niveau 3.",
            PORTRAIT,
            &["Gestalt-Thérapie", "TCC", "Sexologie", "MBCT"],
            Some("/equipe/dr-deblangey"),
        ),
        member(
            "Delphine Varesano",
            "Intervenante Yoga",
            "Enseignante de Hatha Yoga et Yoga Nidra formée à l'Institut Vidya. Elle guide les pratiquants vers la détente profonde et l'équilibre intérieur à travers les postures traditionnelles et la méditation.",
            "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800&q=80",
            &["Hatha Yoga", "Yoga Nidra"],
            Some("/equipe/yoga"),
        ),
        member(
            "Intervenants Partenaires",
            "Psychologues & Thérapeutes",
            "Une équipe de professionnels qualifiés collaborant avec l'EMPC pour offrir un accompagnement pluridisciplinaire : psychologues cliniciens, art-thérapeutes et praticiens en médecines douces.",
            "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?w=800&q=80",
            &["Psychologie", "Art-thérapie", "Médecines douces"],
            None,
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "Un accompagnement bienveillant qui m'a permis de retrouver confiance en moi. Le Dr Deblangey a su m'écouter et me guider avec patience.",
            "Marie-Claire",
            "Patiente",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=600&q=80",
        ),
        (
            "Les séances de groupe MBCT ont transformé ma façon d'appréhender le quotidien. Je recommande vivement cette approche.",
            "Jean-Pierre",
            "Patient",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600&q=80",
        ),
        (
            "Grâce à la nutrition comportementale, j'ai enfin trouvé une relation apaisée avec la nourriture. Merci pour cette libération.",
            "Sophie",
            "Patiente",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=600&q=80",
        ),
    ]
    .iter()
    .map(|(quote, name, role, image_src)| Testimonial {
        quote: quote.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        image_src: image_src.to_string(),
    })
    .collect()
}

pub fn certifications() -> Vec<Certification> {
    [
        ("IFGT", "Institut Français de Gestalt-Thérapie", "5C6B4A"),
        ("AFTCC", "Association Française de TCC", "993366"),
        ("IDES", "Institut de Thérapie Systémique", "8B7355"),
        ("MBCT", "Certification MBCT", "5C6B4A"),
        ("Ordre", "Ordre des Médecins", "993366"),
    ]
    .iter()
    .map(|(acronym, name, colour)| Certification {
        acronym: acronym.to_string(),
        name: name.to_string(),
        logo: format!("https://placehold.co/120x40/{}/white?text={}", colour, acronym),
    })
    .collect()
}

pub fn home() -> HomePage {
    HomePage {
        overline: "Psychothérapies & Bien-être".into(),
        title_lines: vec!["Espace Médical de".into(), "Psychothérapies".into()],
        tagline: "Un lieu de soin holistique à La Réunion".into(),
        hero_image: ImageRef::new(HERO, "Paysage tropical de La Réunion"),
        welcome: "Il vous sera possible dans cet Espace d'articuler vos entretiens individuels, vos suivis familiaux ou conjugaux et vos disciplines corporelles (protocole de méditation MBCT et MECL - manger et vivre en pleine conscience).\n\n\
L'indication en sera posée et proposée lors de temps d'échanges entre les différents professionnels, respectant la confidentialité.\n\n\
Votre référent (personne qui vous a adressé : psychiatre, psychologue, généraliste…) en sera averti avec votre accord.\n\n\
Je vous laisse découvrir ce lieu et ses consultants en psychologie et intervenants des disciplines corporelles associées où vous pourrez apprendre à vous sentir en harmonie quelle que soit l'approche utilisée.".into(),
        welcome_signature: "Dr Joëlle DEBLANGEY".into(),
        portrait: ImageRef::new(PORTRAIT, "Dr Joëlle Deblangey"),
        welcome_image: ImageRef::new(NATURE, "Nature apaisante"),
        cards_overline: "Nos approches".into(),
        cards_heading: "Un accompagnement sur mesure".into(),
        cards_hint: "Survolez chaque approche pour découvrir nos méthodes thérapeutiques".into(),
        therapy_cards: therapy_cards(),
        certifications_title: "Formations & Certifications".into(),
        certifications: certifications(),
        groupal: GroupalTeaser {
            overline: "Travail groupal".into(),
            heading: "Méditation de pleine conscience".into(),
            text: "La **MBCT** est destinée à prévenir les rechutes dépressives et accompagner les troubles anxieux.\n\n\
Le protocole **MECL** s'adresse aux personnes souffrant de troubles du comportement alimentaire.".into(),
            points: vec![
                "8 séances de groupe".into(),
                "Petit effectif (4-10)".into(),
                "Entretien préalable".into(),
            ],
            image: ImageRef::new(MEDITATION, "Méditation"),
            link: NavLink::new("En savoir plus", "/groupal/mbct"),
        },
        team_title: "Notre équipe".into(),
        team_subtitle: "Des professionnels qualifiés et bienveillants pour vous accompagner".into(),
        team: team_members(),
        testimonials_title: "Ce qu'ils disent".into(),
        testimonials_subtitle: "Témoignages de nos patients sur leur parcours thérapeutique".into(),
        testimonials: testimonials(),
        contact_heading: "Prenons rendez-vous".into(),
        contact_text: "Envoyez-nous un SMS pour convenir d'un premier entretien".into(),
    }
}
