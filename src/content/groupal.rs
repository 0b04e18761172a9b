//! Group programmes: MBCT and MECL.

use super::model::*;

const GROUPAL: &str = "Travail Groupal";

pub fn all() -> Vec<PageConfig> {
    vec![mbct(), mecl()]
}

fn gallery_item(id: u32, url: &str, title: &str, description: &str) -> CarouselItem {
    CarouselItem {
        id: id.to_string(),
        url: url.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
    }
}

pub fn mbct() -> PageConfig {
    PageConfig {
        slug: "/groupal/mbct".into(),
        breadcrumb: GROUPAL.into(),
        title: "Méditation MBCT".into(),
        subtitle: "Thérapie Cognitive basée sur la Pleine Conscience pour prévenir les rechutes dépressives".into(),
        hero_image: ImageRef::new(
            "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&q=80",
            "Méditation pleine conscience",
        ),
        accent: Accent::Sage,
        intro_quote: Some(
            "La Mindfulness Based Cognitive Therapy est une approche de groupe développée par Zindel Segal, John Teasdale et Mark Williams.".into(),
        ),
        intro_text: "La **MBCT** est destinée à prévenir les rechutes dépressives chez les patients en rémission d'une dépression unipolaire récurrente. Ce programme combine les techniques de la thérapie cognitive avec les pratiques de méditation de pleine conscience pour aider les participants à reconnaître et à se désengager des schémas de pensée négatifs.".into(),
        definition_title: Some("Qu'est-ce que la MBCT ?".into()),
        definition: vec![ContentBlock::Prose {
            text: "La MBCT est reconnue par la Haute Autorité de Santé (HAS) comme traitement de prévention des rechutes dépressives. Son efficacité a été démontrée par de nombreuses études cliniques.".into(),
            quote: Some("Dr Deblangey : Instructrice certifiée niveau 3".into()),
        }],
        axes_title: Some("Le Programme".into()),
        axes: vec![
            axis("Pilote automatique", "Prendre conscience de nos automatismes et habitudes mentales qui nous éloignent du moment présent."),
            axis("Vivre dans sa tête", "Observer comment nos pensées créent notre réalité et apprendre à s'en distancier."),
            axis("Rassembler l'esprit dispersé", "Cultiver la concentration et l'attention soutenue par la pratique de la respiration."),
            axis("Reconnaître l'aversion", "Identifier nos réactions automatiques face aux expériences désagréables."),
            axis("Accepter et laisser être", "Développer une attitude d'acceptation bienveillante envers soi-même."),
            axis("Les pensées ne sont pas des faits", "Comprendre la nature des pensées et leur impact sur nos émotions."),
            axis("Comment prendre soin de moi", "Élaborer un plan d'action personnalisé pour maintenir l'équilibre."),
            axis("Maintenir et approfondir", "Intégrer la pleine conscience dans la vie quotidienne."),
        ],
        session_title: Some("Informations pratiques".into()),
        session: vec![
            ContentBlock::prose(
                "Chaque séance de 2h30 vous guide progressivement vers une nouvelle façon d'être en relation avec vos pensées et émotions. Les séances sont espacées de 8 jours pour permettre l'intégration des pratiques.",
            ),
            ContentBlock::Checklist {
                title: Some("Horaires".into()),
                items: strings(&["Vendredis 18h - 20h30", "Samedis 10h - 12h30", "8 séances espacées de 8 jours"]),
            },
            ContentBlock::prose(
                "L'inclusion dans le groupe est soumise à un **entretien préalable gratuit** permettant de vérifier que le programme correspond à vos besoins.",
            ),
        ],
        indications_title: Some("Pour qui ?".into()),
        indications: strings(&[
            "Prévention de la rechute dépressive",
            "Troubles anxieux et phobiques",
            "Troubles du comportement alimentaire",
            "Addictions",
            "Troubles du contrôle des impulsions",
            "Effondrement professionnel (burn-out)",
        ]),
        prices: vec![price(Some("Programme complet"), "640€", "8 séances de 2h30")],
        price_note: Some(
            "Soit 80€ par séance. Professionnelle non conventionnée, secteur 3. Possibilité de prise en charge partielle selon votre mutuelle.".into(),
        ),
        references: vec![reference("Association MBCT France", Some("https://mbct-france.fr"))],
        extras: vec![ExtraSection::Gallery {
            id: "mbct".into(),
            title: "L'expérience MBCT".into(),
            subtitle: Some("Découvrez l'ambiance de nos séances de méditation pleine conscience".into()),
            items: vec![
                gallery_item(1, "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&q=80", "Méditation guidée", "Séances en petit groupe"),
                gallery_item(2, "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800&q=80", "Pratique du yoga", "Postures douces et respirations"),
                gallery_item(3, "https://images.unsplash.com/photo-1518495973542-4542c06a5843?w=800&q=80", "Connexion à la nature", "Exercices en plein air"),
                gallery_item(4, "https://images.unsplash.com/photo-1515377905703-c4788e51af15?w=800&q=80", "Moments de calme", "Espaces de respiration"),
                gallery_item(5, "https://images.unsplash.com/photo-1508672019048-805c876b67e2?w=800&q=80", "Bord de mer", "La Réunion, cadre idéal"),
            ],
        }],
        ..Default::default()
    }
}

pub fn mecl() -> PageConfig {
    PageConfig {
        slug: "/groupal/mecl".into(),
        breadcrumb: GROUPAL.into(),
        title: "Protocole ME-CL".into(),
        subtitle: "Manger et Vivre en Pleine Conscience : méditation adaptée aux Troubles du Comportement Alimentaire".into(),
        hero_image: ImageRef::new(
            "https://images.unsplash.com/photo-1498837167922-ddd27525d352?w=800&q=80",
            "Alimentation consciente et équilibrée",
        ),
        accent: Accent::Gold,
        intro_quote: Some(
            "Retrouver la faim physique, écouter son corps, manger avec tous ses sens... C'est possible, avec bienveillance et sans jugement.".into(),
        ),
        intro_text: "Le protocole ME-CL (Manger et Vivre en Pleine Conscience) s'inspire du niveau 1 « Mindful Eating-Conscious Living » pour accompagner les personnes souffrant de troubles du comportement alimentaire vers une relation apaisée avec la nourriture.".into(),
        session_title: Some("Le Programme".into()),
        session: vec![ContentBlock::FeatureCards {
            cards: vec![
                feature("👥", "Petit groupe", "4 à 9 participants pour un accompagnement personnalisé et des échanges authentiques."),
                feature("🍎", "Expérimentations alimentaires", "Exercices pratiques pour redécouvrir les sensations de faim et de satiété."),
                feature("🧘", "Méditations adaptées", "Pratiques de pleine conscience spécifiquement conçues pour le rapport à l'alimentation."),
                feature("🌿", "Mouvements corporels", "Pratiques en conscience pour reconnecter corps et esprit."),
                feature("💬", "Partages bienveillants", "Espaces d'échange dans un cadre sécurisant et non-jugeant."),
                feature("☀️", "Journée de pleine conscience", "Une journée complète avec repas partagé incluse dans le programme."),
            ],
        }],
        indications_title: Some("Pour qui ?".into()),
        indications: strings(&[
            "Troubles du Comportement Alimentaire",
            "Boulimie et Hyperphagie",
            "Alimentation compulsive",
            "Suites chirurgicales (bypass, sleeve) sans amélioration",
            "Poursuite de régimes sans résultat durable",
        ]),
        prices: vec![price(Some("Investissement"), "560€", "8 séances + journée de pleine conscience")],
        price_note: Some(
            "Entretien préalable gratuit. Professionnelle non conventionnée, secteur 3. Possibilité de prise en charge partielle selon votre mutuelle.".into(),
        ),
        extras: vec![ExtraSection::Gallery {
            id: "mecl".into(),
            title: "L'expérience MECL".into(),
            subtitle: Some(
                "Manger et vivre en pleine conscience : retrouvez une relation apaisée avec l'alimentation".into(),
            ),
            items: vec![
                gallery_item(1, "https://images.unsplash.com/photo-1490645935967-10de6ba17061?w=800&q=80", "Alimentation consciente", "Redécouvrir le plaisir de manger"),
                gallery_item(2, "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=800&q=80", "Pleine conscience", "Écouter ses sensations"),
                gallery_item(3, "https://images.unsplash.com/photo-1498837167922-ddd27525d352?w=800&q=80", "Équilibre", "Sans régime restrictif"),
                gallery_item(4, "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&q=80", "Méditation", "Respiration et ancrage"),
                gallery_item(5, "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800&q=80", "Travail en groupe", "Partage et bienveillance"),
            ],
        }],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programmes_carry_galleries() {
        for page in all() {
            let galleries = page
                .extras
                .iter()
                .filter(|e| matches!(e, ExtraSection::Gallery { items, .. } if items.len() == 5))
                .count();
            assert_eq!(galleries, 1, "{}", page.slug);
        }
    }

    #[test]
    fn test_mbct_has_eight_steps() {
        assert_eq!(mbct().axes.len(), 8);
    }
}
