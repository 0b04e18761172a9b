//! Legal notice and privacy policy.

use serde::Serialize;

use super::model::{Accent, NavLink};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledValue {
    pub label: String,
    pub value: String,
}

/// Body of one legal section: either a table of labelled values or
/// free paragraphs (Markdown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegalBody {
    Values { values: Vec<LabelledValue> },
    Paragraphs { paragraphs: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalSection {
    /// Ordinal shown in the margin ("01"), privacy policy only.
    pub number: Option<String>,
    pub title: String,
    pub body: LegalBody,
    pub link: Option<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalCta {
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalPage {
    pub slug: String,
    pub overline: String,
    /// Title split so the last word can carry the accent colour.
    pub title_lead: String,
    pub title_accent: String,
    pub accent: Accent,
    pub subtitle: String,
    pub sections: Vec<LegalSection>,
    pub last_updated: String,
    pub cta: Option<LegalCta>,
    pub secondary_link: NavLink,
}

impl LegalPage {
    pub fn title(&self) -> String {
        format!("{} {}", self.title_lead, self.title_accent)
    }
}

fn values(title: &str, items: &[(&str, &str)]) -> LegalSection {
    LegalSection {
        number: None,
        title: title.to_string(),
        body: LegalBody::Values {
            values: items
                .iter()
                .map(|(label, value)| LabelledValue {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        },
        link: None,
    }
}

fn paragraphs(number: Option<usize>, title: &str, paragraphs: &[&str]) -> LegalSection {
    LegalSection {
        number: number.map(|n| format!("{:02}", n)),
        title: title.to_string(),
        body: LegalBody::Paragraphs {
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        },
        link: None,
    }
}

const LAST_UPDATED: &str = "Dernière mise à jour : Décembre 2024";

pub fn all() -> Vec<LegalPage> {
    vec![mentions_legales(), confidentialite()]
}

pub fn mentions_legales() -> LegalPage {
    let mut personal_data = paragraphs(
        None,
        "Données personnelles",
        &["Conformément au Règlement Général sur la Protection des Données (RGPD), vous disposez d'un droit d'accès, de rectification et de suppression de vos données personnelles."],
    );
    personal_data.link = Some(NavLink::new(
        "Consulter notre politique de confidentialité",
        "/confidentialite",
    ));

    LegalPage {
        slug: "/mentions-legales".into(),
        overline: "Informations légales".into(),
        title_lead: "Mentions".into(),
        title_accent: "légales".into(),
        accent: Accent::Primary,
        subtitle: "Informations relatives à l'éditeur du site et aux conditions d'utilisation".into(),
        sections: vec![
            values(
                "Éditeur du site",
                &[
                    ("Responsable", "Dr Joëlle DEBLANGEY"),
                    ("Profession", "Docteur en médecine, certifiée en Psychothérapies"),
                    ("Statut", "Professionnel libéral - Secteur 3"),
                ],
            ),
            values(
                "Coordonnées",
                &[
                    ("Téléphone", "0692 46 07 89 (SMS uniquement)"),
                    ("Localisation", "La Réunion, France"),
                    ("Site web", "https://empc.re"),
                ],
            ),
            values(
                "Hébergement",
                &[
                    ("Hébergeur", "Vercel Inc."),
                    ("Adresse", "340 S Lemon Ave #4133, Walnut, CA 91789, USA"),
                    ("Site", "https://vercel.com"),
                ],
            ),
            paragraphs(
                None,
                "Propriété intellectuelle",
                &[
                    "L'ensemble du contenu de ce site (textes, images, logo, structure) est la propriété exclusive de l'EMPC et du Dr Joëlle Deblangey, sauf mention contraire.",
                    "Toute reproduction, représentation, modification, publication ou adaptation de tout ou partie des éléments du site est interdite sans autorisation écrite préalable.",
                ],
            ),
            paragraphs(
                None,
                "Limitation de responsabilité",
                &[
                    "Les informations fournies sur ce site sont à titre indicatif et ne sauraient constituer un avis médical. Pour tout problème de santé, consultez un professionnel qualifié.",
                    "L'EMPC ne saurait être tenu responsable des dommages directs ou indirects résultant de l'utilisation de ce site ou de l'impossibilité d'y accéder.",
                ],
            ),
            personal_data,
        ],
        last_updated: LAST_UPDATED.into(),
        cta: None,
        secondary_link: NavLink::new("Retour à l'accueil", "/"),
    }
}

pub fn confidentialite() -> LegalPage {
    let sections = vec![
        paragraphs(
            Some(1),
            "Responsable du traitement",
            &[
                "Le responsable du traitement des données personnelles collectées sur ce site est :",
                "**Dr Joëlle DEBLANGEY**  \nEMPC - Espace Médical de Psychothérapies et de Travail Corporel Associé  \nLa Réunion, France  \nContact : 0692 46 07 89 (SMS)",
            ],
        ),
        paragraphs(
            Some(2),
            "Données collectées",
            &[
                "Dans le cadre de l'utilisation de ce site, nous pouvons être amenés à collecter les données suivantes :",
                "- **Données de navigation** : adresse IP, type de navigateur, pages consultées, date et heure de visite\n- **Données de contact** : si vous nous contactez par SMS ou formulaire (nom, numéro de téléphone, message)\n- **Cookies techniques** : nécessaires au bon fonctionnement du site",
                "Aucune donnée médicale n'est collectée via ce site web.",
            ],
        ),
        paragraphs(
            Some(3),
            "Finalités du traitement",
            &[
                "Vos données personnelles sont utilisées pour :",
                "- Assurer le bon fonctionnement technique du site\n- Répondre à vos demandes de contact ou de renseignements\n- Améliorer l'expérience utilisateur et la navigation\n- Réaliser des statistiques anonymes de fréquentation",
            ],
        ),
        paragraphs(
            Some(4),
            "Base légale",
            &[
                "Le traitement de vos données repose sur :",
                "- **Votre consentement** pour les cookies non essentiels et l'envoi de communications\n- **Notre intérêt légitime** pour les statistiques et l'amélioration du site\n- **L'exécution d'un contrat** lors de la prise de rendez-vous",
            ],
        ),
        paragraphs(
            Some(5),
            "Durée de conservation",
            &[
                "Vos données sont conservées pendant une durée limitée :",
                "- **Données de navigation** : 13 mois maximum\n- **Données de contact** : 3 ans après le dernier contact\n- **Cookies** : 13 mois maximum",
                "Au-delà de ces délais, vos données sont supprimées ou anonymisées.",
            ],
        ),
        paragraphs(
            Some(6),
            "Cookies",
            &[
                "Ce site utilise des cookies pour améliorer votre expérience :",
                "**Cookies essentiels** (toujours actifs)  \nNécessaires au fonctionnement du site, ils ne peuvent pas être désactivés.",
                "**Cookies analytiques** (optionnels)  \nPermettent de mesurer l'audience du site de manière anonyme.",
                "Vous pouvez gérer vos préférences de cookies via les paramètres de votre navigateur.",
            ],
        ),
        paragraphs(
            Some(7),
            "Vos droits",
            &[
                "Conformément au RGPD, vous disposez des droits suivants :",
                "- **Droit d'accès** : obtenir une copie de vos données\n- **Droit de rectification** : corriger des données inexactes\n- **Droit à l'effacement** : demander la suppression de vos données\n- **Droit à la limitation** : restreindre le traitement\n- **Droit à la portabilité** : récupérer vos données dans un format lisible\n- **Droit d'opposition** : vous opposer au traitement de vos données",
                "Pour exercer ces droits, contactez-nous par SMS au **0692 46 07 89**.",
            ],
        ),
        paragraphs(
            Some(8),
            "Sécurité des données",
            &[
                "Nous mettons en œuvre des mesures techniques et organisationnelles appropriées pour protéger vos données :",
                "- Connexion sécurisée HTTPS\n- Hébergement sur des serveurs sécurisés (Vercel)\n- Accès restreint aux données personnelles\n- Mise à jour régulière des systèmes de sécurité",
            ],
        ),
        paragraphs(
            Some(9),
            "Réclamation",
            &[
                "Si vous estimez que vos droits ne sont pas respectés, vous pouvez adresser une réclamation à la CNIL :",
                "**Commission Nationale de l'Informatique et des Libertés**  \n3 Place de Fontenoy, TSA 80715  \n75334 PARIS CEDEX 07  \nSite : www.cnil.fr",
            ],
        ),
    ];

    LegalPage {
        slug: "/confidentialite".into(),
        overline: "RGPD".into(),
        title_lead: "Politique de".into(),
        title_accent: "confidentialité".into(),
        accent: Accent::Secondary,
        subtitle: "Protection de vos données personnelles conformément au Règlement Général sur la Protection des Données".into(),
        sections,
        last_updated: LAST_UPDATED.into(),
        cta: Some(LegalCta {
            heading: "Une question sur vos données ?".into(),
            text: "N'hésitez pas à nous contacter pour toute question relative à la protection de vos données personnelles".into(),
        }),
        secondary_link: NavLink::new("Mentions légales", "/mentions-legales"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_sections_are_numbered_in_order() {
        let page = confidentialite();
        let numbers: Vec<_> = page
            .sections
            .iter()
            .filter_map(|s| s.number.clone())
            .collect();
        assert_eq!(numbers.len(), 9);
        assert_eq!(numbers.first().map(String::as_str), Some("01"));
        assert_eq!(numbers.last().map(String::as_str), Some("09"));
    }

    #[test]
    fn test_legal_pages_link_each_other() {
        let mentions = mentions_legales();
        assert!(mentions
            .sections
            .iter()
            .any(|s| s.link.as_ref().map(|l| l.href.as_str()) == Some("/confidentialite")));
        assert_eq!(confidentialite().secondary_link.href, "/mentions-legales");
        assert_eq!(mentions.title(), "Mentions légales");
    }
}
