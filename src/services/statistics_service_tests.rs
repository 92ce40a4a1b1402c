// src/services/statistics_service_tests.rs
//
// UNIT TESTS: Statistics Service
//
// PURPOSE:
// - Prove the neutral defaults: empty collections aggregate to zeros and
//   None, never a failure
// - Prove the clamp: goal progress never leaves [0, 100]
// - Prove the None/zero split: no read book → None first-read year
//
// INVARIANTS TESTED:
// - Averages skip missing ratings but count every book's score
// - Insights are tie-aware on both authors and years
// - Distributions sort by descending count with blank labels bucketed

#[cfg(test)]
mod aggregate_tests {
    use crate::domain::book::{Book, BookStatus, Prioridade};
    use crate::services::statistics_service::StatisticsService;
    use chrono::NaiveDate;

    fn livro(titulo: &str) -> Book {
        Book::new(
            titulo.to_string(),
            "Autora".to_string(),
            "Outros".to_string(),
            "Categoria".to_string(),
        )
    }

    fn lido(titulo: &str, ano: i32) -> Book {
        let mut b = livro(titulo);
        b.marcar_lido(NaiveDate::from_ymd_opt(ano, 6, 15).unwrap());
        b
    }

    /// Scenario: empty collection, goal 20 → all-neutral aggregate
    #[test]
    fn test_empty_collection_yields_neutral_defaults() {
        let stats = StatisticsService::default().aggregate(&[], 20, 2024);

        assert_eq!(stats.total_livros, 0);
        assert_eq!(stats.livros_lidos, 0);
        assert_eq!(stats.media_avaliacao, 0.0);
        assert_eq!(stats.media_score, 0.0);
        assert_eq!(stats.lidos_no_ano, 0);
        assert_eq!(stats.progresso_meta, 0.0);
        assert_eq!(stats.primeiro_ano_leitura, None);
    }

    /// The rating average skips unrated books instead of diluting
    #[test]
    fn test_rating_average_skips_missing_ratings() {
        let mut avaliado = livro("Avaliado");
        avaliado.avaliacao = Some(4.0);
        let mut outro = livro("Outro avaliado");
        outro.avaliacao = Some(3.0);
        let sem_nota = livro("Sem nota");

        let stats = StatisticsService::default().aggregate(&[avaliado, outro, sem_nota], 20, 2024);
        assert_eq!(stats.media_avaliacao, 3.5);
    }

    /// The score average runs over every book; read books contribute 0
    #[test]
    fn test_score_average_counts_read_books_as_zero() {
        let service = StatisticsService::default();

        let mut pendente = livro("Pendente");
        pendente.status = BookStatus::NaEstante;
        pendente.prioridade = Prioridade::Media;
        pendente.ano_publicacao = Some(2023);
        // 2 + 4 + 9 under the default formula
        let finalizado = lido("Finalizado", 2023);

        let stats = service.aggregate(&[pendente, finalizado], 20, 2024);
        assert_eq!(stats.media_score, 7.5);
    }

    /// Only read dates inside the reference year count toward the goal
    #[test]
    fn test_goal_counts_only_the_reference_year() {
        let livros = vec![lido("Antigo", 2022), lido("Deste ano", 2024), lido("Outro", 2024)];

        let stats = StatisticsService::default().aggregate(&livros, 20, 2024);
        assert_eq!(stats.lidos_no_ano, 2);
        assert_eq!(stats.progresso_meta, 10.0);
    }

    /// Overachieving the goal clamps at 100
    #[test]
    fn test_goal_progress_clamps_at_one_hundred() {
        let livros: Vec<_> = (0..5).map(|i| lido(&format!("Livro {}", i), 2024)).collect();

        let stats = StatisticsService::default().aggregate(&livros, 3, 2024);
        assert_eq!(stats.lidos_no_ano, 5);
        assert_eq!(stats.progresso_meta, 100.0);
    }

    /// A zero goal reports zero progress instead of dividing
    #[test]
    fn test_zero_goal_reports_zero_progress() {
        let stats = StatisticsService::default().aggregate(&[lido("Livro", 2024)], 0, 2024);
        assert_eq!(stats.progresso_meta, 0.0);
    }

    /// First-read year is the minimum read year, or None when nothing
    /// was read
    #[test]
    fn test_first_read_year_is_the_minimum_or_none() {
        let service = StatisticsService::default();

        let pendentes = vec![livro("Na fila")];
        assert_eq!(service.aggregate(&pendentes, 20, 2024).primeiro_ano_leitura, None);

        let livros = vec![lido("Recente", 2023), lido("Primeiro", 2018), lido("Meio", 2021)];
        assert_eq!(
            service.aggregate(&livros, 20, 2024).primeiro_ano_leitura,
            Some(2018)
        );
    }

    /// Status counters split read, reading and everything else
    #[test]
    fn test_status_counters() {
        let mut lendo = livro("Lendo agora");
        lendo.status = BookStatus::Lendo;
        let mut estante = livro("Na estante");
        estante.status = BookStatus::NaEstante;

        let stats =
            StatisticsService::default().aggregate(&[lido("Pronto", 2024), lendo, estante], 20, 2024);

        assert_eq!(stats.total_livros, 3);
        assert_eq!(stats.livros_lidos, 1);
        assert_eq!(stats.livros_lendo, 1);
        assert_eq!(stats.livros_nao_lidos, 2);
    }
}

#[cfg(test)]
mod insight_tests {
    use crate::domain::book::Book;
    use crate::services::statistics_service::StatisticsService;
    use chrono::NaiveDate;

    fn lido(autor: &str, data: (i32, u32, u32)) -> Book {
        let mut b = Book::new(
            "Título".to_string(),
            autor.to_string(),
            "Outros".to_string(),
            "Categoria".to_string(),
        );
        b.marcar_lido(NaiveDate::from_ymd_opt(data.0, data.1, data.2).unwrap());
        b
    }

    /// Nothing read → no highlights at all
    #[test]
    fn test_no_read_books_yield_empty_insights() {
        let pendente = Book::new(
            "Na fila".to_string(),
            "Autora".to_string(),
            "Outros".to_string(),
            "Categoria".to_string(),
        );

        let insights = StatisticsService::default().insights(&[pendente]);
        assert_eq!(insights.autor_favorito, None);
        assert_eq!(insights.ano_de_ouro, None);
        assert_eq!(insights.primeira_leitura, None);
        assert_eq!(insights.ultima_leitura, None);
    }

    /// The favorite author carries the count; ties share the podium
    #[test]
    fn test_favorite_author_is_tie_aware() {
        let livros = vec![
            lido("Clarice Lispector", (2023, 1, 10)),
            lido("Clarice Lispector", (2023, 5, 2)),
            lido("Machado de Assis", (2022, 3, 8)),
            lido("Machado de Assis", (2024, 7, 19)),
            lido("Jorge Amado", (2021, 9, 30)),
        ];

        let favorito = StatisticsService::default()
            .insights(&livros)
            .autor_favorito
            .unwrap();
        assert_eq!(favorito.nomes, ["Clarice Lispector", "Machado de Assis"]);
        assert_eq!(favorito.livros, 2);
    }

    /// The golden year lists tied years ascending
    #[test]
    fn test_golden_year_is_tie_aware() {
        let livros = vec![
            lido("A", (2024, 1, 1)),
            lido("B", (2024, 2, 1)),
            lido("C", (2021, 4, 1)),
            lido("D", (2021, 8, 1)),
            lido("E", (2023, 6, 1)),
        ];

        let ouro = StatisticsService::default().insights(&livros).ano_de_ouro.unwrap();
        assert_eq!(ouro.anos, [2021, 2024]);
        assert_eq!(ouro.livros, 2);
    }

    /// First and last read dates bracket the journey
    #[test]
    fn test_first_and_last_read_dates() {
        let livros = vec![
            lido("Meio", (2022, 6, 1)),
            lido("Primeiro", (2019, 2, 14)),
            lido("Último", (2024, 11, 3)),
        ];

        let insights = StatisticsService::default().insights(&livros);
        assert_eq!(insights.primeira_leitura, NaiveDate::from_ymd_opt(2019, 2, 14));
        assert_eq!(insights.ultima_leitura, NaiveDate::from_ymd_opt(2024, 11, 3));
    }
}

#[cfg(test)]
mod distribution_tests {
    use crate::domain::book::Book;
    use crate::services::statistics_service::StatisticsService;
    use chrono::NaiveDate;

    fn livro(classe: &str, categoria: &str) -> Book {
        Book::new(
            "Título".to_string(),
            "Autora".to_string(),
            classe.to_string(),
            categoria.to_string(),
        )
    }

    /// Rows sort by descending count; ties fall back to ascending name
    #[test]
    fn test_distribution_sorts_by_count_then_name() {
        let livros = vec![
            livro("Ficção", "Romance"),
            livro("Ficção", "Fantasia"),
            livro("Poesia", "Lírica"),
            livro("Ensaios", "Crítica"),
        ];

        let por_classe = StatisticsService::default().distribution_por_classe(&livros);
        let nomes: Vec<&str> = por_classe.iter().map(|c| c.nome.as_str()).collect();
        assert_eq!(nomes, ["Ficção", "Ensaios", "Poesia"]);
        assert_eq!(por_classe[0].total, 2);
    }

    /// Blank field values land in the undefined bucket
    #[test]
    fn test_blank_labels_fall_into_the_undefined_bucket() {
        let livros = vec![livro("Ficção", "Romance"), livro("  ", "Romance")];

        let por_classe = StatisticsService::default().distribution_por_classe(&livros);
        assert!(por_classe.iter().any(|c| c.nome == "Não definido" && c.total == 1));
    }

    /// Status distribution uses the display labels
    #[test]
    fn test_status_distribution_uses_display_labels() {
        let mut lido = livro("Ficção", "Romance");
        lido.marcar_lido(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let pendente = livro("Ficção", "Fantasia");

        let por_status = StatisticsService::default().distribution_por_status(&[lido, pendente]);
        let nomes: Vec<&str> = por_status.iter().map(|c| c.nome.as_str()).collect();
        assert!(nomes.contains(&"Lido"));
        assert!(nomes.contains(&"A Ler"));
    }

    /// The timeline keys read years ascending and skips undated reads
    #[test]
    fn test_reads_per_year_timeline() {
        let mut a = livro("Ficção", "Romance");
        a.marcar_lido(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
        let mut b = livro("Ficção", "Fantasia");
        b.marcar_lido(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let mut c = livro("Poesia", "Lírica");
        c.marcar_lido(NaiveDate::from_ymd_opt(2021, 9, 1).unwrap());

        let linha_do_tempo = StatisticsService::default().reads_per_year(&[a, b, c]);

        let pares: Vec<(i32, u32)> = linha_do_tempo.into_iter().collect();
        assert_eq!(pares, [(2021, 2), (2024, 1)]);
    }
}
