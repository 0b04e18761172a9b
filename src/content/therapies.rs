//! Individual therapy pages.

use super::model::*;

const THERAPIES: &str = "Nos Thérapies";

pub fn all() -> Vec<PageConfig> {
    vec![gestalt(), tcc(), nutrition(), sexologie(), familiales()]
}

pub fn gestalt() -> PageConfig {
    PageConfig {
        slug: "/therapies/gestalt".into(),
        breadcrumb: THERAPIES.into(),
        title: "La Gestalt-Thérapie".into(),
        subtitle: "Mettre en forme ce que vous vivez pour mieux vous comprendre et avancer".into(),
        hero_image: ImageRef::new(
            "https://images.unsplash.com/photo-1499209974431-9dddcece7f88?w=1200&q=80",
            "Thérapie et bien-être",
        ),
        accent: Accent::Primary,
        intro_quote: Some(
            "Découvrir ce que nous ressentons et ce dont nous avons besoin, c'est quelque chose d'essentiel pour la survie, pour la vie et pour un développement harmonieux, satisfaisant et plein."
                .into(),
        ),
        intro_text: "Dans le huis clos de notre entretien, vous ne serez pas seul(e) à avancer vers le changement. Nous élaborerons ensemble plusieurs hypothèses, mettant en forme grâce à mon aide et mon ressenti en votre présence les différentes pensées, émotions, besoins, senti, sensations corporelles, intuitions qui traverseront le champ de la séance.".into(),
        definition_title: Some("Qu'est-ce que la Gestalt ?".into()),
        definition: vec![ContentBlock::Prose {
            text: "Le terme **Gestalt** vient d'un verbe allemand *gestalten* qui correspond à l'idée de **« mettre en forme, donner une structure »**.\n\nGestalt-Thérapie signifie donc la thérapie des formes que chacun donne à son existence, à ses contacts, à ses relations, à ses actes.".into(),
            quote: Some(
                "« La Gestalt-thérapie cherche à mettre en lumière les processus par lesquels nous donnons du sens à notre expérience. »".into(),
            ),
        }],
        axes_title: Some("Les 3 axes de travail".into()),
        axes: vec![
            axis(
                "Passé & Présent",
                "Regarder la manière dont l'expérience passée conditionne l'expérience actuelle. Ce passé revécu dans la séance sera remis dans le présent de façon à correspondre à vos besoins actuels.",
            ),
            axis(
                "L'expérience actuelle",
                "Valoriser l'importance et la nouveauté de l'expérience actuelle. Utilisation de diverses expérimentations sous forme de jeux, exercices, supports d'expression, mises en scène et la fameuse « chaise vide ».",
            ),
            axis(
                "Perspective de CHAMP",
                "Inscrire l'expérience thérapeutique dans une perspective de CHAMP : tout ce qui est pertinent pour un sujet à un moment donné, ce qui affecte son expérience.",
            ),
        ],
        practice_title: Some("La pratique".into()),
        practice_items: strings(&[
            "Travail individuel",
            "Travail de groupe : Méditation / pleine conscience guidée",
            "Travail de groupe : Comportement alimentaire",
        ]),
        indications_title: Some("Indications".into()),
        indications: strings(&[
            "Mal-être général",
            "Problèmes de couple (emprise ou autre)",
            "Problèmes sexuels",
            "Troubles du comportement alimentaire",
            "Névroses phobiques, obsessionnelles",
            "Troubles anxieux généralisés",
            "Attaques de panique",
            "Dépression réactionnelle ou chronique",
            "Stress post traumatique",
            "Syndromes maniaco-dépressifs ou bipolaires",
        ]),
        prices: vec![price(None, "75€", "55 minutes")],
        price_note: Some(
            "Avec une feuille de soins qui permettra éventuellement une partie de prise en charge selon votre mutuelle (médecin secteur 3 déconventionnée).".into(),
        ),
        references: vec![
            reference("« Gestalt-thérapie » - Perls, Hefferline et Goodman (1951)", None),
            reference(
                "« Le grand livre de la Gestalt thérapie » - collectif C. G. Masquelier, Eyrolles (2012)",
                None,
            ),
            reference(
                "« Emotions, sentiments et besoins, une approche humaniste » - Myriam Munoz Polit (2011)",
                None,
            ),
        ],
        faqs: vec![
            faq(
                "Qu'est-ce qui différencie la Gestalt des autres thérapies ?",
                "La Gestalt se distingue par son approche globale de l'expérience humaine, intégrant pensées, émotions, sensations corporelles et contexte relationnel. Elle met l'accent sur le « ici et maintenant » tout en explorant comment le passé influence le présent.",
            ),
            faq(
                "Combien de séances sont nécessaires ?",
                "Il n'y a pas de nombre prédéfini. Certaines personnes viennent pour quelques séances ciblées, d'autres s'engagent dans un travail plus long. Nous évaluerons ensemble vos besoins et objectifs dès les premières rencontres.",
            ),
            faq(
                "Qu'est-ce que la « chaise vide » ?",
                "C'est une technique emblématique de la Gestalt où vous dialoguez avec une chaise vide représentant une personne, une partie de vous-même ou une situation. Elle permet d'exprimer des émotions et de résoudre des conflits intérieurs.",
            ),
            faq(
                "La Gestalt est-elle adaptée à mon problème ?",
                "La Gestalt s'adresse à un large éventail de difficultés : anxiété, dépression, troubles relationnels, deuil, transitions de vie, troubles alimentaires, etc. Un premier entretien permettra de déterminer si cette approche vous convient.",
            ),
        ],
        ..Default::default()
    }
}

pub fn tcc() -> PageConfig {
    PageConfig {
        slug: "/therapies/tcc".into(),
        breadcrumb: THERAPIES.into(),
        title: "Thérapies Comportementales et Cognitives".into(),
        subtitle: "Une approche scientifique et validée pour un changement durable".into(),
        hero_image: ImageRef::new(
            "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=1200&q=80",
            "Réflexion et analyse",
        ),
        accent: Accent::Secondary,
        intro_quote: Some(
            "Les TCC permettent de comprendre comment nos pensées influencent nos émotions et nos comportements, pour mieux les transformer.".into(),
        ),
        intro_text: "Les Thérapies Comportementales et Cognitives (TCC) sont des thérapies brèves, structurées et validées scientifiquement. Elles se concentrent sur les difficultés actuelles du patient et visent à modifier les pensées automatiques négatives et les comportements problématiques qui maintiennent la souffrance psychologique.".into(),
        definition_title: Some("Qu'est-ce que les TCC ?".into()),
        definition: vec![ContentBlock::FeatureCards {
            cards: vec![
                feature(
                    "💭",
                    "Cognitions",
                    "Identification et restructuration des pensées automatiques négatives et des croyances dysfonctionnelles qui alimentent la souffrance.",
                ),
                feature(
                    "❤️",
                    "Émotions",
                    "Apprentissage de la régulation émotionnelle et développement de stratégies pour mieux gérer l'anxiété, la tristesse ou la colère.",
                ),
                feature(
                    "🎯",
                    "Comportements",
                    "Modification progressive des comportements d'évitement ou problématiques par des exercices pratiques et une exposition graduée.",
                ),
            ],
        }],
        axes_title: Some("Principes fondamentaux".into()),
        axes: vec![
            axis(
                "Approche collaborative",
                "Thérapeute et patient travaillent ensemble comme une équipe. Vous êtes acteur de votre changement, guidé par un professionnel bienveillant.",
            ),
            axis(
                "Focus sur le présent",
                "Les TCC se concentrent sur les difficultés actuelles plutôt que sur le passé lointain, pour des résultats concrets et rapides.",
            ),
            axis(
                "Exercices pratiques",
                "Des tâches à réaliser entre les séances permettent d'ancrer les apprentissages dans votre quotidien et d'accélérer le changement.",
            ),
        ],
        session_title: Some("Déroulement d'une thérapie TCC".into()),
        session: vec![ContentBlock::Steps {
            steps: vec![
                step(
                    "Évaluation initiale",
                    "Analyse de votre situation, définition des objectifs thérapeutiques et mise en place d'un plan de traitement personnalisé.",
                    Some("1-2 séances"),
                ),
                step(
                    "Phase de traitement",
                    "Apprentissage de techniques cognitives et comportementales, exercices pratiques, confrontation progressive aux situations évitées.",
                    Some("8-15 séances"),
                ),
                step(
                    "Consolidation",
                    "Renforcement des acquis, prévention de la rechute, espacement progressif des séances.",
                    Some("2-4 séances"),
                ),
            ],
        }],
        indications_title: Some("Indications".into()),
        indications: strings(&[
            "Troubles anxieux généralisés",
            "Phobies spécifiques (phobie sociale, agoraphobie...)",
            "Trouble panique et attaques de panique",
            "Trouble obsessionnel-compulsif (TOC)",
            "Dépression",
            "Troubles du comportement alimentaire",
            "Addictions comportementales",
            "Troubles du sommeil",
            "Gestion du stress et burn-out",
            "Affirmation de soi et confiance en soi",
        ]),
        prices: vec![price(None, "75€", "55 minutes")],
        price_note: Some(
            "Médecin secteur 3 déconventionnée. Une partie peut être prise en charge selon votre mutuelle.".into(),
        ),
        references: vec![
            reference(
                "Association Française de Thérapie Comportementale et Cognitive (AFTCC)",
                Some("https://www.aftcc.org"),
            ),
            reference("Haute Autorité de Santé - Recommandations sur les TCC", None),
        ],
        faqs: vec![
            faq(
                "Combien de séances sont nécessaires en TCC ?",
                "Une TCC est généralement une thérapie brève, de 10 à 20 séances. La durée dépend de la problématique et de votre progression. Nous fixerons ensemble des objectifs clairs dès le départ.",
            ),
            faq(
                "Dois-je faire des exercices entre les séances ?",
                "Oui, les exercices à domicile font partie intégrante de la TCC. Ils permettent d'ancrer les apprentissages et d'accélérer votre progression. Ils sont adaptés à votre rythme et vos capacités.",
            ),
            faq(
                "La TCC est-elle efficace pour l'anxiété ?",
                "Oui, la TCC est reconnue comme l'un des traitements les plus efficaces pour les troubles anxieux. Elle a fait l'objet de nombreuses études scientifiques validant son efficacité.",
            ),
            faq(
                "Peut-on combiner TCC et médicaments ?",
                "Oui, la TCC peut être associée à un traitement médicamenteux si nécessaire. Cette combinaison est souvent recommandée pour les troubles sévères. Nous travaillons en lien avec votre médecin traitant ou psychiatre.",
            ),
        ],
        ..Default::default()
    }
}

pub fn nutrition() -> PageConfig {
    PageConfig {
        slug: "/therapies/nutrition".into(),
        breadcrumb: THERAPIES.into(),
        title: "Nutrition Comportementale".into(),
        subtitle: "Retrouver une relation apaisée avec l'alimentation".into(),
        hero_image: ImageRef::new(
            "https://images.unsplash.com/photo-1490818387583-1baba5e638af?w=1200&q=80",
            "Alimentation saine et équilibrée",
        ),
        accent: Accent::Gold,
        intro_quote: Some(
            "Votre poids, conséquence de votre comportement alimentaire, se normalisera vers la fin des séances, et surtout ne sera plus votre obsession !".into(),
        ),
        intro_text: "Voyant l'échec à long terme des régimes équilibrés classiques, revoyant les patients qui ont regrossi suite à un régime bien conduit, je me suis intéressée aux Thérapies comportementales et cognitives pour les troubles du Comportement Alimentaire. Cette approche ne vous impose pas de régime restrictif mais vous aide à retrouver une alimentation intuitive, guidée par vos sensations de faim et de satiété.".into(),
        definition_title: Some("Une approche différente".into()),
        definition: vec![ContentBlock::Contrast {
            avoid_title: "Ce que nous ne faisons PAS".into(),
            avoid: strings(&[
                "Régimes restrictifs",
                "Comptage de calories",
                "Aliments interdits",
                "Culpabilisation",
            ]),
            embrace_title: "Ce que nous cultivons".into(),
            embrace: strings(&[
                "Écoute de vos sensations corporelles",
                "Reconnaissance de la vraie faim",
                "Plaisir de manger en conscience",
                "Bienveillance envers vous-même",
            ]),
        }],
        session_title: Some("Contenu des séances".into()),
        session: vec![ContentBlock::FeatureCards {
            cards: vec![
                feature(
                    "🍽️",
                    "Retrouver la FAIM physique",
                    "Distinguer la faim physique de la faim émotionnelle ou psychique",
                ),
                feature(
                    "📊",
                    "Échelle de faim",
                    "Établir votre propre échelle de faim avec vos symptômes corporels",
                ),
                feature(
                    "🧘",
                    "Respiration méditative",
                    "Espaces de respiration pour vous reconnecter à vos sensations",
                ),
                feature(
                    "🎯",
                    "Situations à risque",
                    "Identifier les situations qui déclenchent le « manger sans faim »",
                ),
                feature(
                    "😌",
                    "Satiété",
                    "Travail sur les sensations de satiété et le signal de fin de repas",
                ),
                feature(
                    "🍃",
                    "Plaisir alimentaire",
                    "Redécouvrir le goût et le plaisir des aliments en pleine conscience",
                ),
            ],
        }],
        indications_title: Some("Indications".into()),
        indications: strings(&[
            "Boulimie",
            "Hyperphagie boulimique",
            "Anorexie (avec suivi systémique familial conseillé et psychothérapie associées)",
            "Échec des régimes de toute sorte à répétition avec obsession du poids",
            "Orthorexie (sélection des aliments très rigide)",
            "Alimentation émotionnelle",
            "Grignotage compulsif",
            "Relation conflictuelle avec la nourriture",
        ]),
        prices: vec![price(None, "55€", "30 minutes")],
        price_note: Some(
            "Environ 10 séances pour un adulte, moins pour l'enfant et l'adolescent (à partir de 10 ans). Rythme conseillé : tous les 15 jours.".into(),
        ),
        references: vec![reference(
            "GROS - Groupe de Réflexion sur l'Obésité et le Surpoids",
            Some("https://www.gros.org"),
        )],
        faqs: vec![
            faq(
                "Cette approche remplace-t-elle un régime ?",
                "Oui, justement ! L'objectif est de sortir de la logique des régimes qui échouent à long terme. On travaille sur la reconnexion aux sensations de faim et satiété plutôt que sur des restrictions.",
            ),
            faq(
                "Est-ce adapté si je suis en surpoids ?",
                "Oui, cette approche s'adresse à toutes les personnes ayant une relation difficile avec l'alimentation, quel que soit leur poids. L'objectif est de retrouver une alimentation apaisée, pas de maigrir à tout prix.",
            ),
            faq(
                "Dois-je noter ce que je mange ?",
                "Non, on ne compte pas les calories. En revanche, un carnet de sensations peut être utile pour repérer vos patterns alimentaires et émotionnels.",
            ),
            faq(
                "Combien de temps dure le suivi ?",
                "En moyenne 10 séances espacées de 15 jours, mais cela varie selon votre situation. L'approche est progressive et respecte votre rythme.",
            ),
        ],
        extras: vec![ExtraSection::Stats {
            title: "Organisation des séances".into(),
            stats: vec![
                stat("30", "minutes par séance"),
                stat("15", "jours entre chaque séance"),
                stat("~10", "séances en moyenne"),
            ],
        }],
        ..Default::default()
    }
}

pub fn sexologie() -> PageConfig {
    PageConfig {
        slug: "/therapies/sexologie".into(),
        breadcrumb: THERAPIES.into(),
        title: "Sexologie".into(),
        subtitle: "Un accompagnement professionnel et bienveillant pour votre épanouissement intime".into(),
        hero_image: ImageRef::new(
            "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?w=1200&q=80",
            "Couple et intimité",
        ),
        accent: Accent::Terracotta,
        intro_quote: None,
        intro_text: "La sexologie est une discipline médicale qui traite des difficultés liées à la sexualité. Dans un cadre de confiance et de confidentialité absolue, le Dr Deblangey vous accompagne dans la compréhension et la résolution de vos préoccupations intimes, seul(e) ou en couple.".into(),
        definition_title: Some("Une approche globale et respectueuse".into()),
        definition: vec![
            ContentBlock::FeatureCards {
                cards: vec![
                    feature(
                        "🎓",
                        "Formation & Expertise",
                        "Le Dr Joëlle Deblangey est diplômée en Médecine Sexologique de la Faculté de médecine de Lille/Amiens (diplôme obtenu en octobre 2012). Elle est membre de l'association SEXO974.",
                    ),
                    feature(
                        "🤝",
                        "Modalités de consultation",
                        "Les consultations peuvent se dérouler en entretien individuel ou avec votre partenaire, selon vos besoins et la nature de votre demande.",
                    ),
                ],
            },
            ContentBlock::Prose {
                text: String::new(),
                quote: Some(
                    "« La sexualité fait partie intégrante de la santé et du bien-être. En parler avec un professionnel est un premier pas vers l'épanouissement. »".into(),
                ),
            },
        ],
        axes_title: Some("Domaines d'accompagnement".into()),
        axes: vec![
            axis(
                "Troubles du désir",
                "Baisse de libido, désir sexuel hypoactif, différences de désir dans le couple.",
            ),
            axis(
                "Difficultés fonctionnelles",
                "Troubles de l'érection, éjaculation précoce, anorgasmie, dyspareunie, vaginisme.",
            ),
            axis(
                "Questions identitaires",
                "Accompagnement sur les questions d'identité sexuelle, d'orientation, ou de genre.",
            ),
        ],
        indications_title: Some("Motifs de consultation".into()),
        indications: strings(&[
            "Troubles du désir sexuel",
            "Troubles de l'érection",
            "Éjaculation précoce ou retardée",
            "Anorgasmie (difficulté à atteindre l'orgasme)",
            "Vaginisme et dyspareunie",
            "Douleurs pendant les rapports",
            "Difficultés relationnelles liées à la sexualité",
            "Questions sur l'orientation ou l'identité sexuelle",
            "Sexualité et maladies chroniques",
            "Accompagnement post-traumatique",
        ]),
        prices: vec![
            price(Some("Individuel"), "75€", "55 minutes"),
            price(Some("Avec partenaire"), "100€", "55 minutes"),
        ],
        price_note: Some("Les consultations sont confidentielles. Médecin secteur 3 déconventionnée.".into()),
        references: vec![
            reference("SEXO974 - Association des sexologues de La Réunion", None),
            reference(
                "Diplôme Universitaire de Sexologie - Faculté de Médecine Lille/Amiens",
                None,
            ),
        ],
        faqs: vec![
            faq(
                "Dois-je venir avec mon/ma partenaire ?",
                "Pas nécessairement. Les consultations individuelles sont tout aussi efficaces. Si vous le souhaitez, votre partenaire peut vous accompagner lors de certaines séances.",
            ),
            faq(
                "De quoi parle-t-on en consultation ?",
                "On aborde vos préoccupations à votre rythme. Il n'y a pas de question taboue. Le but est de comprendre votre situation pour vous proposer un accompagnement adapté.",
            ),
            faq(
                "Est-ce vraiment confidentiel ?",
                "Absolument. Toutes les consultations sont couvertes par le secret médical. Rien n'est transmis à qui que ce soit sans votre accord explicite.",
            ),
            faq(
                "Combien de consultations faut-il prévoir ?",
                "Cela dépend de votre problématique. Certaines difficultés se résolvent en quelques séances, d'autres nécessitent un suivi plus long. Nous évaluerons ensemble vos besoins.",
            ),
        ],
        extras: vec![ExtraSection::Notice {
            icon: "🔒".into(),
            title: "Confidentialité absolue".into(),
            text: "Tous les échanges sont protégés par le secret médical. Vous pouvez parler en toute confiance dans un espace sécurisé et sans jugement.".into(),
        }],
        ..Default::default()
    }
}

pub fn familiales() -> PageConfig {
    PageConfig {
        slug: "/therapies/familiales".into(),
        breadcrumb: THERAPIES.into(),
        title: "Thérapies Familiales & Conjugales".into(),
        subtitle: "L'approche systémique pour retrouver l'harmonie relationnelle".into(),
        hero_image: ImageRef::new(
            "https://images.unsplash.com/photo-1491438590914-bc09fcaaf77a?w=1200&q=80",
            "Famille et relations",
        ),
        accent: Accent::Sage,
        intro_quote: Some(
            "Dans un système familial, le changement d'un seul élément modifie l'ensemble des interactions.".into(),
        ),
        intro_text: "La thérapie systémique considère que les difficultés d'un individu s'inscrivent dans un contexte relationnel. Qu'il s'agisse de tensions conjugales, de conflits familiaux ou de difficultés avec un enfant, cette approche vise à comprendre et transformer les interactions pour retrouver un équilibre bénéfique à tous.".into(),
        definition_title: Some("L'approche systémique".into()),
        definition: vec![
            ContentBlock::Subheading {
                text: "Comprendre le système".into(),
            },
            ContentBlock::Prose {
                text: "La thérapie systémique ne cherche pas un « coupable » mais analyse les interactions entre les membres d'une famille ou d'un couple. Chacun participe au système, chacun peut contribuer au changement.\n\nCette vision circulaire permet de sortir des schémas d'accusation mutuelle pour travailler ensemble vers des solutions.".into(),
                quote: Some("Mémoire : « L'utilisation du jeu de loi dans la relation d'emprise »".into()),
            },
            ContentBlock::Orbit {
                centre: "Équilibre".into(),
                labels: strings(&["Communication", "Écoute", "Respect", "Confiance"]),
            },
        ],
        axes_title: Some("Domaines d'intervention".into()),
        axes: vec![
            axis(
                "Thérapie de couple",
                "Améliorer la communication, résoudre les conflits, surmonter une crise, infidélité, perte de désir, préparation à la parentalité.",
            ),
            axis(
                "Thérapie familiale",
                "Difficultés avec un enfant ou adolescent, conflits intergénérationnels, recomposition familiale, deuil, maladie d'un proche.",
            ),
            axis(
                "Médiation & séparation",
                "Accompagnement lors d'une séparation pour préserver le lien parental et protéger les enfants.",
            ),
        ],
        session_title: Some("Déroulement des séances".into()),
        session: vec![ContentBlock::Formats {
            formats: vec![
                SessionFormat {
                    title: "Thérapie de couple".into(),
                    duration: "1 heure".into(),
                    description: "Les deux partenaires participent ensemble aux séances. Le thérapeute crée un espace sécurisé où chacun peut s'exprimer et être entendu.".into(),
                },
                SessionFormat {
                    title: "Thérapie familiale".into(),
                    duration: "1 heure 15".into(),
                    description: "Selon les situations, la composition des séances peut varier : toute la famille, sous-groupes (parents seuls, fratrie), ou séances individuelles complémentaires.".into(),
                },
            ],
        }],
        indications_title: Some("Motifs de consultation".into()),
        indications: strings(&[
            "Difficultés de communication dans le couple",
            "Conflits répétitifs et escalade",
            "Infidélité et rupture de confiance",
            "Préparation à la parentalité",
            "Difficultés éducatives avec un enfant",
            "Troubles du comportement chez l'adolescent",
            "Conflits liés à la recomposition familiale",
            "Accompagnement lors d'un deuil familial",
            "Maladie chronique et impact sur la famille",
            "Séparation et maintien du lien parental",
        ]),
        prices: vec![
            price(Some("Thérapie de couple"), "110€", "1 heure"),
            price(Some("Thérapie familiale"), "150€", "1h15"),
        ],
        price_note: Some(
            "Le nombre de séances varie selon les situations. Un premier entretien permet d'évaluer les besoins et de définir un cadre de travail.".into(),
        ),
        references: vec![
            reference("IDES - Institut de formation en thérapie systémique", None),
            reference("Thérapie familiale et de couple - Approche systémique", None),
        ],
        faqs: vec![
            faq(
                "Toute la famille doit-elle être présente ?",
                "Pas nécessairement. Selon la situation, nous pouvons travailler avec tout ou partie de la famille. Le cadre s'adapte à vos besoins et contraintes.",
            ),
            faq(
                "Mon partenaire refuse de venir, que faire ?",
                "Il est possible de commencer seul(e) un travail sur la relation. Souvent, le partenaire rejoint la thérapie après quelques séances quand il voit les changements positifs.",
            ),
            faq(
                "À partir de quel âge un enfant peut-il participer ?",
                "Les enfants peuvent participer dès qu'ils sont capables de s'exprimer, généralement à partir de 4-5 ans. Les séances sont adaptées à leur âge avec des supports ludiques si besoin.",
            ),
            faq(
                "Comment se déroule une première séance de couple ?",
                "Le premier entretien permet de comprendre votre histoire, vos difficultés actuelles et vos attentes. Chacun peut s'exprimer. Nous définissons ensemble les objectifs du travail.",
            ),
        ],
        extras: vec![ExtraSection::Notice {
            icon: "🤝".into(),
            title: "L'engagement de tous".into(),
            text: "La thérapie systémique fonctionne grâce à l'implication de chaque participant.\n\nLa motivation à vouloir améliorer la situation est le premier pas vers le changement.".into(),
        }],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_therapy_has_mandatory_sections() {
        for page in all() {
            assert!(!page.indications.is_empty(), "{} has no indications", page.slug);
            assert!(!page.prices.is_empty(), "{} has no prices", page.slug);
            assert!(page.slug.starts_with("/therapies/"));
        }
    }

    #[test]
    fn test_accents_are_distinct() {
        let accents: Vec<Accent> = all().iter().map(|p| p.accent).collect();
        for (i, a) in accents.iter().enumerate() {
            assert!(!accents[i + 1..].contains(a));
        }
    }
}
