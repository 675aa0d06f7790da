#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::calc::calculate_metrics;
    use crate::error::ReportError;
    use crate::models::{Holding, QuoteRecord};

    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding::new(String::from("AAPL"), 100, dec!(154.23)),
            Holding::new(String::from("AMZN"), 10, dec!(1223.43)),
        ]
    }

    #[test]
    fn derives_metrics_for_one_holding() {
        let holdings = vec![Holding::new(String::from("AAPL"), 100, dec!(154.23))];
        let quotes = vec![QuoteRecord::new(0, String::from("AAPL"), dec!(160.00))];

        let report = calculate_metrics(&holdings, &quotes).unwrap();
        assert!(report.unmatched().is_empty());

        let row = &report.rows()[0];
        assert_eq!(*row.book_value(), dec!(15423.00));
        assert_eq!(*row.market_value(), dec!(16000.00));
        assert_eq!(*row.gain_loss(), dec!(577.00));
        assert_eq!(*row.change(), dec!(103.74));
    }

    #[test]
    fn derives_metrics_for_full_portfolio() {
        let holdings = sample_holdings();
        let quotes = vec![
            QuoteRecord::new(0, String::from("AAPL"), dec!(230.00)),
            QuoteRecord::new(1, String::from("AMZN"), dec!(3300.00)),
        ];

        let report = calculate_metrics(&holdings, &quotes).unwrap();
        let rows = report.rows();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].symbol(), "AAPL");
        assert_eq!(*rows[0].latest_price(), dec!(230.00));
        assert_eq!(*rows[0].book_value(), dec!(15423.00));
        assert_eq!(*rows[0].market_value(), dec!(23000.00));
        assert_eq!(*rows[0].gain_loss(), dec!(7577.00));
        assert_eq!(*rows[0].change(), dec!(149.13));

        assert_eq!(rows[1].symbol(), "AMZN");
        assert_eq!(*rows[1].book_value(), dec!(12234.30));
        assert_eq!(*rows[1].market_value(), dec!(33000.00));
        assert_eq!(*rows[1].gain_loss(), dec!(20765.70));
        assert_eq!(*rows[1].change(), dec!(269.73));
    }

    #[test]
    fn aligns_out_of_order_quotes_by_symbol() {
        let holdings = sample_holdings();
        let quotes = vec![
            QuoteRecord::new(1, String::from("AMZN"), dec!(3300.00)),
            QuoteRecord::new(0, String::from("AAPL"), dec!(230.00)),
        ];

        let report = calculate_metrics(&holdings, &quotes).unwrap();
        let rows = report.rows();

        assert_eq!(rows[0].symbol(), "AAPL");
        assert_eq!(*rows[0].latest_price(), dec!(230.00));
        assert_eq!(rows[1].symbol(), "AMZN");
        assert_eq!(*rows[1].latest_price(), dec!(3300.00));
    }

    #[test]
    fn first_quote_record_wins_on_duplicate_symbol() {
        let holdings = vec![Holding::new(String::from("AAPL"), 100, dec!(154.23))];
        let quotes = vec![
            QuoteRecord::new(0, String::from("AAPL"), dec!(230.00)),
            QuoteRecord::new(0, String::from("AAPL"), dec!(999.00)),
        ];

        let report = calculate_metrics(&holdings, &quotes).unwrap();
        assert_eq!(*report.rows()[0].latest_price(), dec!(230.00));
    }

    #[test]
    fn omits_holding_without_quote_and_records_it() {
        let holdings = sample_holdings();
        let quotes = vec![QuoteRecord::new(1, String::from("AMZN"), dec!(3300.00))];

        let report = calculate_metrics(&holdings, &quotes).unwrap();

        assert_eq!(report.rows().len(), 1);
        assert_eq!(report.rows()[0].symbol(), "AMZN");
        assert_eq!(report.unmatched(), &vec![String::from("AAPL")]);
    }

    #[test]
    fn zero_cost_holding_is_invalid_input() {
        let holdings = vec![Holding::new(String::from("FREE"), 5, dec!(0))];
        let quotes = vec![QuoteRecord::new(0, String::from("FREE"), dec!(10.00))];

        let err = calculate_metrics(&holdings, &quotes).unwrap_err();
        match err {
            ReportError::InvalidInput { symbol, .. } => assert_eq!(symbol, "FREE"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn empty_inputs_produce_empty_report() {
        let report = calculate_metrics(&[], &[]).unwrap();
        assert!(report.rows().is_empty());
        assert!(report.unmatched().is_empty());
    }
}
