//! Template bodies for a Go application built on cobra.
//!
//! The root template carries two marker comments that later `add` runs rewrite:
//! [`COMMANDS_IMPORT_MARKER`] is replaced once by the commands package import,
//! [`SUBCOMMANDS_MARKER`] stays in place and new registrations go above it.
//!
//! Conditional tags always share a line with the text they guard, so no tag
//! sits alone on a line and the rendered whitespace does not depend on
//! standalone-line stripping.

pub const COMMANDS_IMPORT_MARKER: &str = "//+cobra:commandsImport";
pub const SUBCOMMANDS_MARKER: &str = "//+cobra:subcommands";

pub const MAIN_FILE: &str = "main.go";
pub const ROOT_FILE: &str = "root.go";
pub const COMMANDS_DIR: &str = "commands";
pub const SOURCE_EXT: &str = "go";
pub const LICENSE_FILE: &str = "LICENSE";

pub const MAIN_TEMPLATE: &str = r#"/*
{{Copyright}}
{{#if Legal.Header}}{{Legal.Header}}{{/if}}
*/
package main

import "{{PkgName}}/pkg/{{AppName}}"

func main() {
	{{AppName}}.Execute()
}
"#;

pub const ROOT_TEMPLATE: &str = r#"/*
{{Copyright}}
{{#if Legal.Header}}{{Legal.Header}}{{/if}}
*/
package {{AppName}}

import (
{{#if Viper}}	"fmt"
{{/if}}	"os"

	//+cobra:commandsImport
	"github.com/spf13/cobra"
{{#if Viper}}	"github.com/spf13/viper"
{{/if}})

{{#if Viper}}var cfgFile string

{{/if}}// BuildRootCmd represents the base command when called without any subcommands
func BuildRootCmd() *cobra.Command {
	rootCmd := &cobra.Command{
		Use:   "{{AppName}}",
		Short: "A brief description of your application",
		Long: `A longer description that spans multiple lines and likely contains
examples and usage of using your application.`,
		// Uncomment the following line if your bare application
		// has an action associated with it:
		// Run: func(cmd *cobra.Command, args []string) { },
	}

	//+cobra:subcommands

	// Here you will define your flags and configuration settings.
	// Cobra supports persistent flags, which, if defined here,
	// will be global for your application.
	{{#unless Viper}}// {{/unless}}rootCmd.PersistentFlags().StringVar(&cfgFile, "config", "", "config file (default is $HOME/.{{AppName}}.yaml)")

	// Cobra also supports local flags, which will only run
	// when this action is called directly.
	rootCmd.Flags().BoolP("toggle", "t", false, "Help message for toggle")

	return rootCmd
}

// Execute adds all child commands to the root command and sets flags appropriately.
// This is called by main.main(). It only needs to happen once.
func Execute() {
	if err := BuildRootCmd().Execute(); err != nil {
		os.Exit(1)
	}
}{{#if Viper}}

func init() {
	cobra.OnInitialize(initConfig)
}

// initConfig reads in config file and ENV variables if set.
func initConfig() {
	if cfgFile != "" {
		// Use config file from the flag.
		viper.SetConfigFile(cfgFile)
	} else {
		// Find home directory.
		home, err := os.UserHomeDir()
		cobra.CheckErr(err)

		// Search config in home directory with name ".{{AppName}}" (without extension).
		viper.AddConfigPath(home)
		viper.SetConfigType("yaml")
		viper.SetConfigName(".{{AppName}}")
	}

	viper.AutomaticEnv() // read in environment variables that match

	// If a config file is found, read it in.
	if err := viper.ReadInConfig(); err == nil {
		fmt.Fprintln(os.Stderr, "Using config file:", viper.ConfigFileUsed())
	}
}{{/if}}
"#;

pub const ADD_COMMAND_TEMPLATE: &str = r#"/*
{{Project.Copyright}}
{{#if Project.Legal.Header}}{{Project.Legal.Header}}{{/if}}
*/
package commands

import (
	"fmt"

	"github.com/spf13/cobra"
)

// Build{{title CmdName}}Cmd represents the {{CmdName}} command
func Build{{title CmdName}}Cmd() *cobra.Command {
	cmd := &cobra.Command{
		Use:   "{{CmdName}}",
		Short: "A brief description of your command",
		Long: `A longer description that spans multiple lines and likely contains examples
and usage of using your command.`,
		Run: func(cmd *cobra.Command, args []string) {
			fmt.Println("{{CmdName}} called")
		},
	}
	return cmd
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_template_carries_each_marker_once() {
        assert_eq!(ROOT_TEMPLATE.matches(COMMANDS_IMPORT_MARKER).count(), 1);
        assert_eq!(ROOT_TEMPLATE.matches(SUBCOMMANDS_MARKER).count(), 1);
    }

    #[test]
    fn test_other_templates_carry_no_markers() {
        for body in [MAIN_TEMPLATE, ADD_COMMAND_TEMPLATE] {
            assert!(!body.contains(COMMANDS_IMPORT_MARKER));
            assert!(!body.contains(SUBCOMMANDS_MARKER));
        }
    }
}
