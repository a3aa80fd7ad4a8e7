//! Day 19: Aplenty
//!
//! Parts are routed through named workflows of `category <|> value: target`
//! rules starting at `in`. Part 2 pushes whole rating ranges through the same
//! rules instead of individual parts.

use crate::utils::{line_error, parse_field, solve_failed};
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;
use std::ops::Range;

const START_WORKFLOW: &str = "in";
const RATING_RANGE: Range<u64> = 1..4001;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 19, tags = ["2023", "ranges", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    X,
    M,
    A,
    S,
}

impl Category {
    fn parse(c: char) -> anyhow::Result<Self> {
        match c {
            'x' => Ok(Category::X),
            'm' => Ok(Category::M),
            'a' => Ok(Category::A),
            's' => Ok(Category::S),
            other => bail!("unknown category {other:?}"),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'a> {
    Accept,
    Reject,
    Workflow(&'a str),
}

impl<'a> Target<'a> {
    fn parse(text: &'a str) -> anyhow::Result<Self> {
        match text {
            "A" => Ok(Target::Accept),
            "R" => Ok(Target::Reject),
            "" => bail!("empty target"),
            name => Ok(Target::Workflow(name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Less,
    Greater,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule<'a> {
    category: Category,
    comparison: Comparison,
    value: u64,
    target: Target<'a>,
}

impl Rule<'_> {
    fn matches(&self, part: &PartRatings) -> bool {
        let rating = part[self.category.index()];
        match self.comparison {
            Comparison::Less => rating < self.value,
            Comparison::Greater => rating > self.value,
        }
    }

    /// Split `range` into the sub-range this rule accepts and the rest.
    fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
        match self.comparison {
            Comparison::Less => (
                range.start..range.end.min(self.value),
                range.start.max(self.value)..range.end,
            ),
            Comparison::Greater => {
                // Nothing is greater than u64::MAX, so saturating keeps the match empty
                let above = self.value.saturating_add(1);
                (range.start.max(above)..range.end, range.start..range.end.min(above))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Workflow<'a> {
    rules: Vec<Rule<'a>>,
    fallback: Target<'a>,
}

type PartRatings = [u64; 4];
type RatingRanges = [Range<u64>; 4];

#[derive(Debug)]
pub struct System<'a> {
    workflows: HashMap<&'a str, Workflow<'a>>,
    parts: Vec<PartRatings>,
}

impl<'a> System<'a> {
    fn workflow(&self, name: &str) -> anyhow::Result<&Workflow<'a>> {
        self.workflows
            .get(name)
            .ok_or_else(|| anyhow!("unknown workflow {name:?}"))
    }

    fn is_accepted(&self, part: &PartRatings) -> anyhow::Result<bool> {
        let mut current = START_WORKFLOW;
        // Any acyclic route visits each workflow at most once
        for _ in 0..=self.workflows.len() {
            let workflow = self.workflow(current)?;
            let target = workflow
                .rules
                .iter()
                .find(|rule| rule.matches(part))
                .map_or(workflow.fallback, |rule| rule.target);
            match target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => current = next,
            }
        }
        bail!("workflow cycle reached {current:?}")
    }

    fn accepted_rating_sum(&self) -> anyhow::Result<u64> {
        self.parts.iter().try_fold(0u64, |total, part| {
            if !self.is_accepted(part)? {
                return Ok(total);
            }
            part.iter()
                .try_fold(total, |sum, &rating| sum.checked_add(rating))
                .ok_or_else(|| anyhow!("rating sum overflows u64"))
        })
    }

    fn accepted_combinations(&self) -> anyhow::Result<u64> {
        let ranges = [
            RATING_RANGE,
            RATING_RANGE,
            RATING_RANGE,
            RATING_RANGE,
        ];
        self.count_accepted(Target::Workflow(START_WORKFLOW), ranges, 0)
    }

    fn count_accepted(
        &self,
        target: Target<'_>,
        mut ranges: RatingRanges,
        depth: usize,
    ) -> anyhow::Result<u64> {
        let name = match target {
            Target::Accept => return Ok(ranges.iter().map(|r| r.end - r.start).product()),
            Target::Reject => return Ok(0),
            Target::Workflow(name) => name,
        };
        if depth > self.workflows.len() {
            bail!("workflow cycle reached {name:?}");
        }

        let workflow = self.workflow(name)?;
        let mut total = 0;
        for rule in &workflow.rules {
            let idx = rule.category.index();
            let (matched, rest) = rule.split(&ranges[idx]);
            if !matched.is_empty() {
                let mut branch = ranges.clone();
                branch[idx] = matched;
                total += self.count_accepted(rule.target, branch, depth + 1)?;
            }
            if rest.is_empty() {
                return Ok(total);
            }
            ranges[idx] = rest;
        }
        Ok(total + self.count_accepted(workflow.fallback, ranges, depth + 1)?)
    }
}

fn parse_rule(text: &str) -> anyhow::Result<Rule<'_>> {
    let (condition, target) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("rule {text:?} has no target"))?;
    let mut chars = condition.chars();
    let category = Category::parse(chars.next().context("empty rule")?)?;
    let comparison = match chars.next() {
        Some('<') => Comparison::Less,
        Some('>') => Comparison::Greater,
        _ => bail!("rule {text:?} must compare with '<' or '>'"),
    };
    Ok(Rule {
        category,
        comparison,
        value: parse_field(chars.as_str(), "rule value")?,
        target: Target::parse(target)?,
    })
}

fn parse_workflow(line: &str) -> anyhow::Result<(&str, Workflow<'_>)> {
    let (name, body) = line
        .split_once('{')
        .ok_or_else(|| anyhow!("expected \"name{{rules}}\""))?;
    let body = body
        .strip_suffix('}')
        .ok_or_else(|| anyhow!("workflow {name:?} is missing '}}'"))?;
    if name.is_empty() {
        bail!("workflow has no name");
    }

    let mut steps: Vec<&str> = body.split(',').collect();
    let fallback = Target::parse(steps.pop().unwrap_or_default())?;
    let rules = steps
        .into_iter()
        .map(parse_rule)
        .collect::<anyhow::Result<_>>()?;

    Ok((name, Workflow { rules, fallback }))
}

fn parse_part(line: &str) -> anyhow::Result<PartRatings> {
    let body = line
        .strip_prefix('{')
        .and_then(|l| l.strip_suffix('}'))
        .ok_or_else(|| anyhow!("expected \"{{x=..,m=..,a=..,s=..}}\""))?;

    let mut ratings: [Option<u64>; 4] = [None; 4];
    for field in body.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("rating {field:?} is not key=value"))?;
        let mut key_chars = key.chars();
        let category = match (key_chars.next(), key_chars.next()) {
            (Some(c), None) => Category::parse(c)?,
            _ => bail!("unknown category {key:?}"),
        };
        ratings[category.index()] = Some(parse_field(value, "rating")?);
    }

    let [Some(x), Some(m), Some(a), Some(s)] = ratings else {
        bail!("part must rate all of x, m, a and s");
    };
    Ok([x, m, a, s])
}

impl AocParser for Solver {
    type SharedData<'a> = System<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut workflows = HashMap::new();
        let mut parts = Vec::new();
        let mut in_parts = false;

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                in_parts |= !workflows.is_empty();
                continue;
            }

            if in_parts {
                parts.push(parse_part(line).map_err(|e| line_error(idx, e))?);
            } else {
                let (name, workflow) = parse_workflow(line).map_err(|e| line_error(idx, e))?;
                if workflows.insert(name, workflow).is_some() {
                    return Err(line_error(idx, anyhow!("duplicate workflow {name:?}")));
                }
            }
        }

        if workflows.is_empty() {
            return Err(ParseError::MissingData("workflows".to_string()));
        }
        Ok(System { workflows, parts })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .accepted_rating_sum()
            .map(|sum| sum.to_string())
            .map_err(solve_failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .accepted_combinations()
            .map(|count| count.to_string())
            .map_err(solve_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        let mut system = Solver::parse(input).expect("input should parse");
        <Solver as aoc_solver::Solver>::solve_part(&mut system, part)
    }

    #[test]
    fn test_example_part_1() {
        assert_eq!(solve(EXAMPLE, 1).unwrap(), "19114");
    }

    #[test]
    fn test_example_part_2() {
        assert_eq!(solve(EXAMPLE, 2).unwrap(), "167409079868000");
    }

    #[test]
    fn test_parse_workflow() {
        let (name, workflow) = parse_workflow("qqz{s>2770:qs,m<1801:hdj,R}").unwrap();
        assert_eq!(name, "qqz");
        assert_eq!(workflow.fallback, Target::Reject);
        assert_eq!(
            workflow.rules[1],
            Rule {
                category: Category::M,
                comparison: Comparison::Less,
                value: 1801,
                target: Target::Workflow("hdj"),
            }
        );
    }

    #[test]
    fn test_parse_part() {
        assert_eq!(
            parse_part("{x=787,m=2655,a=1222,s=2876}").unwrap(),
            [787, 2655, 1222, 2876]
        );
        // Field order does not matter
        assert_eq!(parse_part("{s=4,a=3,m=2,x=1}").unwrap(), [1, 2, 3, 4]);
        assert!(parse_part("{x=1,m=2,a=3}").is_err());
        assert!(parse_part("{x=1,m=2,a=3,q=4}").is_err());
        assert!(parse_part("x=1,m=2,a=3,s=4").is_err());
    }

    #[test]
    fn test_rule_split() {
        let less = parse_rule("a<2006:qkq").unwrap();
        assert_eq!(less.split(&(1..4001)), (1..2006, 2006..4001));
        assert_eq!(less.split(&(3000..4001)), (3000..2006, 3000..4001));

        let greater = parse_rule("m>2090:A").unwrap();
        assert_eq!(greater.split(&(1..4001)), (2091..4001, 1..2091));
        assert!(greater.split(&(1..100)).0.is_empty());
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let input = "in{x>18446744073709551615:A,R}\n\n{x=1,m=1,a=1,s=1}\n";
        assert_eq!(solve(input, 1).unwrap(), "0");
        assert_eq!(solve(input, 2).unwrap(), "0");

        let input = "in{x<18446744073709551615:A,R}\n";
        assert_eq!(solve(input, 2).unwrap(), 4000u64.pow(4).to_string());

        let input = "in{A}\n\n{x=18446744073709551615,m=1,a=0,s=0}\n";
        let err = solve(input, 1).unwrap_err();
        assert!(matches!(err, SolveError::SolveFailed(_)), "{err}");
        assert!(err.to_string().contains("overflow"), "{err}");
    }

    #[test]
    fn test_everything_accepted() {
        let input = "in{A}\n\n{x=1,m=2,a=3,s=4}\n";
        assert_eq!(solve(input, 1).unwrap(), "10");
        assert_eq!(solve(input, 2).unwrap(), 4000u64.pow(4).to_string());
    }

    #[test]
    fn test_no_parts() {
        let input = "in{x<10:R,A}\n";
        assert_eq!(solve(input, 1).unwrap(), "0");
        assert_eq!(solve(input, 2).unwrap(), (3991 * 4000u64.pow(3)).to_string());
    }

    #[test]
    fn test_unknown_workflow() {
        let input = "in{x<10:nope,A}\n\n{x=1,m=1,a=1,s=1}\n";
        assert!(matches!(solve(input, 1), Err(SolveError::SolveFailed(_))));
        assert!(matches!(solve(input, 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_missing_start_workflow() {
        let input = "px{A}\n\n{x=1,m=1,a=1,s=1}\n";
        assert!(solve(input, 1).is_err());
        assert!(solve(input, 2).is_err());
    }

    #[test]
    fn test_cycle_detected() {
        let input = "in{x>0:ab,A}\nab{cd}\ncd{in}\n\n{x=1,m=1,a=1,s=1}\n";
        let err = solve(input, 1).unwrap_err();
        assert!(err.to_string().contains("cycle"), "{err}");
        let err = solve(input, 2).unwrap_err();
        assert!(err.to_string().contains("cycle"), "{err}");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("").is_err());
        assert!(Solver::parse("in{x?10:A,R}").is_err());
        assert!(Solver::parse("in{x<ten:A,R}").is_err());
        assert!(Solver::parse("in{z<10:A,R}").is_err());
        assert!(Solver::parse("in{x<10,R}").is_err());
        assert!(Solver::parse("in{A}\nin{R}").is_err());
        assert!(Solver::parse("in{A}\n\n{x=1}").is_err());
    }
}
