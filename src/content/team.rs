//! Team pages: the founder's profile and the yoga team.

use serde::Serialize;

use super::model::{Accent, ImageRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Training {
    pub period: String,
    pub title: String,
    pub description: String,
    /// Title of the dissertation, when the training required one.
    pub dissertation: Option<String>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Qualification {
    pub text: String,
    pub org: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub badge: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workshop {
    pub overline: String,
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub price: String,
    pub price_condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePage {
    pub overline: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub portrait: ImageRef,
    pub years_of_practice: u32,
    pub qualifications: Vec<Qualification>,
    pub career: Vec<TimelineEntry>,
    pub trainings: Vec<Training>,
    pub activities: Vec<Activity>,
    pub workshop: Workshop,
}

fn timeline(period: &str, title: &str, description: &str, icon: &str) -> TimelineEntry {
    TimelineEntry {
        period: period.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

fn training(period: &str, title: &str, description: &str, dissertation: Option<&str>, accent: Accent) -> Training {
    Training {
        period: period.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        dissertation: dissertation.map(str::to_string),
        accent,
    }
}

pub fn dr_deblangey() -> ProfilePage {
    ProfilePage {
        overline: "Votre thérapeute".into(),
        first_name: "Dr Joëlle".into(),
        last_name: "Deblangey".into(),
        role: "Médecin Psychothérapeute certifiée".into(),
        portrait: ImageRef::new(
            "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=800&q=80",
            "Dr Joëlle Deblangey",
        ),
        years_of_practice: 40,
        qualifications: [
            ("Gestalt-Thérapeute", "IFGT"),
            ("Thérapies Comportementales et Cognitives", "AFTCC"),
            ("Thérapeute Systémicienne Familiale", "IDES"),
            ("Médecin Sexologue", "Lille/Amiens"),
            ("Instructrice MBCT certifiée", "niveau 3"),
        ]
        .iter()
        .map(|(text, org)| Qualification {
            text: text.to_string(),
            org: org.to_string(),
        })
        .collect(),
        career: vec![
            timeline(
                "1981-1991",
                "Médecine Générale",
                "10 ans de Médecine générale en remplacement. Thèse de doctorat en Médecine sur le Diabète à la Réunion.",
                "🌱",
            ),
            timeline(
                "1991",
                "Cabinet Libéral à St-Paul",
                "Création du cabinet en Homéopathie (DU Bordeaux 2, 1989), Médecine du sport (CES) et Nutrition (DU diététique et hygiène alimentaire, 1986).",
                "🌿",
            ),
            timeline(
                "1991-2001",
                "Association SHOI",
                "Création, Présidence et Enseignement à l'association SHOI pour l'Enseignement de l'Homéopathie à La Réunion et à Madagascar pendant 10 ans.",
                "🌳",
            ),
        ],
        trainings: vec![
            training(
                "1999-2001",
                "Analyse Transactionnelle",
                "2 ans d'Analyse Transactionnelle en travail groupal.",
                None,
                Accent::Sage,
            ),
            training(
                "2001-2004",
                "Thérapie Comportementale et Cognitive",
                "Diplôme de TCC en 3 ans, membre de l'Association Française de TCC.",
                Some("Les troubles du comportement alimentaire traités par les TCC"),
                Accent::Primary,
            ),
            training(
                "2000-2007",
                "Gestalt-Thérapie",
                "Formation à l'Institut Français de Gestalt thérapie, diplômée novembre 2007.",
                Some("Confluence et Différenciation"),
                Accent::Gold,
            ),
            training(
                "2009-2012",
                "Thérapie Systémique",
                "Thérapeute Systémicienne Familiale et Conjugale (IDES).",
                Some("L'utilisation du jeu de loi dans la relation d'emprise"),
                Accent::Terracotta,
            ),
            training(
                "2007-2011",
                "Sexologie",
                "Diplôme de Médecin Sexologue, Faculté de médecine de Lille/Amiens, obtenu octobre 2012. Membre SEXO974.",
                None,
                Accent::Secondary,
            ),
        ],
        activities: vec![
            Activity {
                badge: "2012".into(),
                title: "Création de l'EMPC".into(),
                description: "Fondation de l'Espace Médical de Psychothérapies et de Travail Corporel Associé.".into(),
            },
            Activity {
                badge: "Certifiée".into(),
                title: "Instructrice MBCT".into(),
                description: "Certification niveau 3 pour enseigner la Méditation de Pleine Conscience Cognitive.".into(),
            },
            Activity {
                badge: "Protocole".into(),
                title: "MECL".into(),
                description: "« Manger et vivre en pleine conscience » - Méditation adaptée aux troubles du comportement alimentaire.".into(),
            },
        ],
        workshop: Workshop {
            overline: "Atelier spécial".into(),
            title: "Méditation MBCT pour Avancés".into(),
            description: "Spécialement conçu pour ceux ayant validé le niveau 1 MBCT. Approfondissez votre pratique de la pleine conscience dans un cadre bienveillant et verdoyant.".into(),
            schedule: "Tous les mercredis, 18h-20h".into(),
            price: "40 € par participant".into(),
            price_condition: "(minimum 5 participants)".into(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tension {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YogaPage {
    pub overline: String,
    pub name: String,
    pub role: String,
    pub tags: Vec<String>,
    pub portrait: ImageRef,
    pub hatha_image: ImageRef,
    /// Markdown.
    pub hatha_text: String,
    pub hatha_elements: Vec<Quote>,
    /// Markdown.
    pub nidra_text: String,
    pub tensions: Vec<Tension>,
    pub tensions_note: String,
    pub quotes: Vec<Quote>,
    pub contact_text: String,
}

pub fn yoga() -> YogaPage {
    YogaPage {
        overline: "Discipline Corporelle".into(),
        name: "Delphine Varesano".into(),
        role: "Intervenante Yoga".into(),
        tags: vec!["Hatha Yoga".into(), "Yoga Nidra".into()],
        portrait: ImageRef::new(
            "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800&q=80",
            "Yoga et méditation",
        ),
        hatha_image: ImageRef::new(
            "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&q=80",
            "Pratique du Hatha Yoga - postures et respiration",
        ),
        hatha_text: "Par la pratique des postures (*āsanas*) et de la respiration (*prānāyāma*), le praticien tente d'augmenter son **prāna** (énergie subtile) afin de diminuer ses pensées et de maîtriser son mental.\n\n\
Āsanas et prānāyāma sont issus des sources traditionnelles indiennes, notamment des écrits de **Swami Sivananda**.".into(),
        hatha_elements: vec![
            Quote {
                text: "Āsanas".into(),
                author: "Postures".into(),
            },
            Quote {
                text: "Prānāyāma".into(),
                author: "Respiration".into(),
            },
        ],
        nidra_text: "Technique du *sommeil éveillé* : équivalent d'une relaxation complète. C'est **Swami Satyananda** qui a mis au point la technique de Yoga Nidra pour dissoudre la *triple tension* :".into(),
        tensions: vec![
            Tension {
                title: "Tension Physique".into(),
                description: "Libération des contractions musculaires accumulées, relâchement profond du corps et de ses tensions quotidiennes.".into(),
                icon: "🧘".into(),
            },
            Tension {
                title: "Tension Émotionnelle".into(),
                description: "Apaisement des émotions refoulées, harmonisation du ressenti intérieur et équilibre affectif retrouvé.".into(),
                icon: "💫".into(),
            },
            Tension {
                title: "Tension Mentale".into(),
                description: "Calme des pensées incessantes, clarté mentale et paix de l'esprit à travers la pratique consciente.".into(),
                icon: "🌿".into(),
            },
        ],
        tensions_note: "Ces trois tensions étant principalement la cause des maladies, des inhibitions et de l'anxiété.".into(),
        quotes: vec![
            Quote {
                text: "Le Yoga Nidra est le tranquillisant Yogique, le moyen naturel d'établir l'harmonie dans tout l'organisme.".into(),
                author: "Swami Satyananda".into(),
            },
            Quote {
                text: "Une once de pratique vaut mieux que des tonnes de théorie.".into(),
                author: "Swami Sivananda".into(),
            },
        ],
        contact_text: "Contactez-nous par SMS pour découvrir les séances de yoga".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_counts() {
        let page = dr_deblangey();
        assert_eq!(page.career.len(), 3);
        assert_eq!(page.trainings.len(), 5);
        assert_eq!(page.qualifications.len(), 5);
        assert_eq!(page.activities.len(), 3);
        assert_eq!(
            page.trainings.iter().filter(|t| t.dissertation.is_some()).count(),
            3
        );
    }

    #[test]
    fn test_yoga_triple_tension() {
        let page = yoga();
        assert_eq!(page.tensions.len(), 3);
        assert!(page.tensions.iter().all(|t| t.title.starts_with("Tension")));
    }
}
