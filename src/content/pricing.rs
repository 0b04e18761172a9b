//! Tarifs page: price tables, payment methods and cancellation policy.

use serde::Serialize;

use super::model::Accent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRow {
    pub label: String,
    pub detail: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTable {
    pub title: String,
    pub subtitle: Option<String>,
    pub accent: Accent,
    /// Header of the label and detail columns; the amount column is "Tarif".
    pub label_header: String,
    pub detail_header: String,
    pub rows: Vec<PriceRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TarifsPage {
    pub overline: String,
    pub heading: String,
    pub lead: String,
    pub practitioner: String,
    pub practitioner_initials: String,
    pub practitioner_subtitle: String,
    pub tables: Vec<PriceTable>,
    pub note: String,
    pub payment_methods: Vec<PaymentMethod>,
    /// Markdown.
    pub cancellation: String,
    pub cancellation_exception: String,
}

fn rows(items: &[(&str, &str, &str)]) -> Vec<PriceRow> {
    items
        .iter()
        .map(|(label, detail, amount)| PriceRow {
            label: label.to_string(),
            detail: detail.to_string(),
            amount: amount.to_string(),
        })
        .collect()
}

pub fn tarifs() -> TarifsPage {
    TarifsPage {
        overline: "Nos Tarifs".into(),
        heading: "Investir dans votre bien-être".into(),
        lead: "Des soins personnalisés pour accompagner votre chemin vers l'équilibre".into(),
        practitioner: "Dr Joëlle Deblangey".into(),
        practitioner_initials: "JD".into(),
        practitioner_subtitle: "Docteur en médecine, certifiée en Psychothérapies".into(),
        tables: vec![
            PriceTable {
                title: "Thérapies Individuelles".into(),
                subtitle: None,
                accent: Accent::Primary,
                label_header: "Prestation".into(),
                detail_header: "Durée".into(),
                rows: rows(&[
                    ("Entretien individuel (GESTALT et/ou TCC)", "55 min", "75 €"),
                    ("Sexologie individuel", "55 min", "75 €"),
                    ("Sexologie (avec partenaire)", "55 min", "100 €"),
                    ("Nutrition comportementale", "30 min", "55 €"),
                ]),
            },
            PriceTable {
                title: "Travail en Groupe".into(),
                subtitle: Some("Maximum 10 participants".into()),
                accent: Accent::Secondary,
                label_header: "Protocole".into(),
                detail_header: "Format".into(),
                rows: rows(&[
                    ("Méditation Thérapeutique MBCT", "8 séances de 2h30", "640 €"),
                    ("Nutrition Comportementale et Méditation (MECL)", "8 séances", "560 €"),
                ]),
            },
            PriceTable {
                title: "Thérapies Couple & Famille".into(),
                subtitle: None,
                accent: Accent::Gold,
                label_header: "Prestation".into(),
                detail_header: "Durée".into(),
                rows: rows(&[
                    ("Thérapie de couple", "1 heure", "110 €"),
                    ("Thérapie familiale", "1h15", "150 €"),
                ]),
            },
        ],
        note: "Professionnelle non conventionnée, secteur 3, honoraires non remboursés par la CGSS. Consulter vos options de mutuelle.".into(),
        payment_methods: [("Chèques", "📝"), ("Virement immédiat", "💳"), ("Espèces", "💶")]
            .iter()
            .map(|(name, icon)| PaymentMethod {
                name: name.to_string(),
                icon: icon.to_string(),
            })
            .collect(),
        cancellation: "Tout RDV non annulé par SMS avant **48h ouvrées** nous restera dû.".into(),
        cancellation_exception: "(sauf cas particulier sur justificatif)".into(),
    }
}
